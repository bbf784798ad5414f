use super::JiraComment;
use super::JiraStory;

fn story() -> JiraStory {
    return JiraStory {
        key: "PROJ-1".to_string(),
        title: "Login page".to_string(),
        description: "As a user I want to log in".to_string(),
        issue_type: "Story".to_string(),
        status: "In Progress".to_string(),
        priority: "High".to_string(),
        assignee: "Dana".to_string(),
        comments: vec![],
    };
}

#[test]
fn it_summarizes_core_fields() {
    let lines = story().summary_lines();

    assert_eq!(lines[0], "PROJ-1 - Story");
    assert_eq!(lines[1], "Title: Login page");
    assert_eq!(lines[2], "Status: In Progress");
    assert_eq!(lines[3], "Priority: High");
    assert_eq!(lines[4], "Assignee: Dana");
    assert_eq!(lines[5], "Description: As a user I want to log in");
    assert_eq!(lines.len(), 6);
}

#[test]
fn it_skips_empty_descriptions() {
    let mut story = story();
    story.description = "".to_string();

    let lines = story.summary_lines();
    assert!(!lines.iter().any(|e| return e.starts_with("Description:")));
}

#[test]
fn it_previews_at_most_three_comments() {
    let mut story = story();
    for n in 1..=5 {
        story.comments.push(JiraComment {
            author: format!("Author {n}"),
            body: format!("Comment {n}"),
        });
    }

    let lines = story.summary_lines();
    assert!(lines.contains(&"Comments (5):".to_string()));
    assert!(lines.contains(&"  Author 1: Comment 1".to_string()));
    assert!(lines.contains(&"  Author 3: Comment 3".to_string()));
    assert!(!lines.iter().any(|e| return e.contains("Author 4")));
    assert_eq!(lines.last().unwrap(), "  ... and more");
}

#[test]
fn it_truncates_long_comment_bodies() {
    let mut story = story();
    story.comments.push(JiraComment {
        author: "Dana".to_string(),
        body: "x".repeat(140),
    });

    let lines = story.summary_lines();
    let preview = lines.last().unwrap();
    assert!(preview.ends_with("..."));
    assert!(preview.contains(&"x".repeat(100)));
    assert!(!preview.contains(&"x".repeat(101)));
}
