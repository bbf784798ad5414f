use super::Conversation;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::Screen;

fn conversation_with(messages: Vec<Message>) -> Conversation {
    return Conversation {
        id: "abc".to_string(),
        title: "New Conversation".to_string(),
        created_at: "2024-05-01T09:30:00".to_string(),
        messages,
    };
}

#[test]
fn it_resumes_empty_conversations_at_input() {
    let conversation = conversation_with(vec![]);
    assert_eq!(conversation.resume_screen(), Screen::AwaitingInput);
}

#[test]
fn it_resumes_assistant_tails_at_decision() {
    let conversation = conversation_with(vec![
        Message::new(MessageKind::User, "Generate test cases"),
        Message::new(MessageKind::Assistant, "TC-1 ..."),
    ]);
    assert_eq!(conversation.resume_screen(), Screen::AwaitingDecision);
}

#[test]
fn it_resumes_user_tails_at_input() {
    let conversation = conversation_with(vec![Message::new(MessageKind::User, "Generate")]);
    assert_eq!(conversation.resume_screen(), Screen::AwaitingInput);
}

#[test]
fn it_resumes_error_tails_at_input() {
    let conversation = conversation_with(vec![
        Message::new(MessageKind::User, "Generate"),
        Message::new(MessageKind::Error, "Error: invalid credentials"),
    ]);
    assert_eq!(conversation.resume_screen(), Screen::AwaitingInput);
}

#[test]
fn it_summarizes_itself() {
    let conversation = conversation_with(vec![]);
    let summary = conversation.summary();

    assert_eq!(summary.id, "abc");
    assert_eq!(summary.title, "New Conversation");
    assert_eq!(summary.created_at, "2024-05-01T09:30:00");
}
