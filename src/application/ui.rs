use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use dialoguer::Password;
use owo_colors::OwoColorize;
use tokio::io::stdin;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::time;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Command;
use crate::domain::models::GenerationForm;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::ModelCatalog;
use crate::domain::models::Screen;
use crate::domain::models::SessionError;
use crate::domain::services::format_timestamp;
use crate::domain::services::render_inline;
use crate::domain::services::Session;
use crate::domain::services::Submit;

/// Delay between accepting test cases and rolling into a fresh
/// conversation, long enough to read the confirmation.
const SATISFIED_PAUSE: Duration = Duration::from_secs(2);

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Start a new conversation.
- /open (/o) [CONVERSATION_ID] - Reopen a previous conversation.
- /list (/l) - Refresh and list your conversations.
- /generate (/g) - Collect Jira story details and generate test cases.
- /refine (/r) [GUIDANCE?] - Ask for the current test cases to be revised.
- /done (/d) - Accept the current test cases and start fresh.
- /models (/ml) - List the models the service offers.
- /model (/m) [MODEL_ID] - Switch the model used for requests.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Caseforge.
        "#;

    return text.trim().to_string();
}

fn prompt_line(screen: Screen) -> &'static str {
    match screen {
        Screen::AwaitingInput => {
            return "Type /generate to create test cases from a Jira story, or /help for commands.";
        }
        Screen::AwaitingDecision => {
            return "Satisfied with these test cases? /done to accept, /refine to revise.";
        }
        Screen::AwaitingRefinementText => {
            return "Describe how the test cases should change.";
        }
    }
}

fn print_error(err: &SessionError) {
    eprintln!("{}", err.user_message().red());
}

fn render_message(message: &Message) {
    let header = match message.kind {
        MessageKind::User => "You".cyan().bold().to_string(),
        MessageKind::Assistant => "Assistant".green().bold().to_string(),
        MessageKind::Error => "Error".red().bold().to_string(),
    };
    println!(
        "\n{header} {}",
        format_timestamp(&message.timestamp).dimmed()
    );

    if let Some(story) = &message.jira_story {
        for line in story.summary_lines() {
            println!("  {}", line.dimmed());
        }
    }
    if let Some(prompt) = message.custom_prompt_annotation() {
        println!("  {} {prompt}", "Custom focus:".bold());
    }

    println!("{}", render_inline(&message.content));
}

fn render_conversation(session: &Session) {
    if let Some(conversation) = &session.state.conversation {
        println!("\n{}", conversation.title.bold().underline());
        for message in &conversation.messages {
            render_message(message);
        }
    }
}

fn render_summaries(session: &Session) {
    if session.state.summaries.is_empty() {
        println!("No conversations yet. Start one with /new.");
        return;
    }

    println!("Conversations:");
    for summary in &session.state.summaries {
        let mut marker = " ";
        if Some(&summary.id) == session.state.active_id.as_ref() {
            marker = "*";
        }
        println!(
            "{marker} ({}) {}, {}",
            summary.id,
            summary.title,
            format_timestamp(&summary.created_at).dimmed()
        );
    }
}

fn collect_form() -> Result<GenerationForm> {
    let theme = ColorfulTheme::default();

    let jira_url = prompt_field(&theme, "Jira URL", Config::get(ConfigKey::JiraUrl))?;
    let jira_username =
        prompt_field(&theme, "Jira username", Config::get(ConfigKey::JiraUsername))?;

    let mut jira_password = Config::get(ConfigKey::JiraToken);
    if jira_password.is_empty() {
        jira_password = Password::with_theme(&theme)
            .with_prompt("Jira API token")
            .allow_empty_password(true)
            .interact()?;
    }

    let jira_story_id = prompt_field(&theme, "Story ID (e.g. PROJ-123)", "".to_string())?;
    let custom_prompt = prompt_field(
        &theme,
        "Custom focus (optional)",
        Config::get(ConfigKey::CustomPrompt),
    )?;

    return Ok(GenerationForm {
        jira_url,
        jira_username,
        jira_password,
        jira_story_id,
        custom_prompt,
        model: Config::get(ConfigKey::Model),
    });
}

fn prompt_field(theme: &ColorfulTheme, label: &str, initial: String) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.default(initial);
    }

    return Ok(input.interact_text()?);
}

async fn new_conversation(session: &mut Session) {
    match session.create_conversation().await {
        Ok(()) => {
            if let Some(conversation) = &session.state.conversation {
                println!("Started {} ({})", conversation.title.bold(), conversation.id);
            }
        }
        Err(err) => {
            print_error(&err);
        }
    }
}

async fn open_conversation(session: &mut Session, id: &str) {
    match session.select_conversation(id).await {
        Ok(Submit::Done) => {
            render_conversation(session);
        }
        Ok(Submit::Skipped) => {
            println!("Hold on, a generation is still in progress.");
        }
        Err(err) => {
            print_error(&err);
        }
    }
}

async fn generate(session: &mut Session) -> Result<()> {
    if session.state.active_id.is_none() {
        println!("Start a conversation first with /new.");
        return Ok(());
    }
    if session.state.in_flight {
        println!("Hold on, a generation is still in progress.");
        return Ok(());
    }

    let form = collect_form()?;

    println!("{}", "Generating test cases...".dimmed());
    match session.submit_generation(&form).await {
        Ok(Submit::Done) => {
            render_conversation(session);
            // The service renames the conversation after the first
            // generation, refresh the sidebar to match.
            session.refresh_conversations().await;
        }
        Ok(Submit::Skipped) => {}
        Err(err) => {
            print_error(&err);
        }
    }

    return Ok(());
}

async fn refine(session: &mut Session, prompt: &str) {
    println!("{}", "Refining test cases...".dimmed());
    match session.submit_refinement(prompt).await {
        Ok(Submit::Done) => {
            render_conversation(session);
        }
        Ok(Submit::Skipped) => {}
        Err(err) => {
            print_error(&err);
        }
    }
}

async fn accept(session: &mut Session) {
    if session.state.screen != Screen::AwaitingDecision {
        println!("There is nothing to accept yet.");
        return;
    }

    println!(
        "{}",
        "Conversation saved! Starting a fresh one...".green()
    );
    time::sleep(SATISFIED_PAUSE).await;
    new_conversation(session).await;
}

fn model_set(catalog: &ModelCatalog, cmd: &Command) {
    if cmd.args.is_empty() {
        println!("Usage: /model MODEL_ID. Run /models to see what's available.");
        return;
    }

    let model_id = &cmd.args[0];
    if !catalog.contains(model_id) {
        println!("No model named {model_id} in the catalog. Run /models to see what's available.");
        return;
    }

    Config::set(ConfigKey::Model, model_id);
    println!("Model set to {}", catalog.label(model_id));
}

async fn dispatch(session: &mut Session, catalog: &ModelCatalog, cmd: &Command) -> Result<bool> {
    if cmd.is_quit() {
        return Ok(true);
    }
    if cmd.is_help() {
        println!("{}", help_text());
    }
    if cmd.is_new() {
        new_conversation(session).await;
    }
    if cmd.is_open() {
        if cmd.args.is_empty() {
            println!("Usage: /open CONVERSATION_ID. Run /list to see ids.");
        } else {
            open_conversation(session, &cmd.args[0]).await;
        }
    }
    if cmd.is_list() {
        session.refresh_conversations().await;
        render_summaries(session);
    }
    if cmd.is_generate() {
        generate(session).await?;
    }
    if cmd.is_refine() {
        if cmd.args.is_empty() {
            session.request_refinement();
        } else {
            refine(session, &cmd.text()).await;
        }
    }
    if cmd.is_done() {
        accept(session).await;
    }
    if cmd.is_model_list() {
        println!("{}", catalog.listing().join("\n"));
    }
    if cmd.is_model_set() {
        model_set(catalog, cmd);
    }

    return Ok(false);
}

pub async fn start(session: &mut Session) -> Result<()> {
    println!("{}", "Caseforge".bold());

    let catalog = session.model_catalog().await;
    if Config::get(ConfigKey::Model).is_empty() {
        Config::set(ConfigKey::Model, &catalog.default);
    }
    println!(
        "Model: {}",
        catalog.label(&Config::get(ConfigKey::Model))
    );

    session.refresh_conversations().await;
    render_summaries(session);

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        println!("\n{}", prompt_line(session.state.screen).dimmed());
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(cmd) => {
                if dispatch(session, &catalog, &cmd).await? {
                    break;
                }
            }
            None => {
                if session.state.screen == Screen::AwaitingRefinementText {
                    refine(session, &line).await;
                } else if line.trim().starts_with('/') {
                    println!("Unknown command. /help lists everything available.");
                }
            }
        }
    }

    return Ok(());
}
