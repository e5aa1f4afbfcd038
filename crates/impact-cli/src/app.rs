use anyhow::Result;
use impact_core::{
    ContentRequest, ContentStudio, ConversationSession, HistoryMode, ImpactError, Sender,
    Settings, Tone,
};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::commands::{self, CommandResult};

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(settings: &Settings, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("Query is empty");
    }
    let relay = settings.build_relay()?;
    let reply = relay
        .generate(query, &settings.assistant.system_context)
        .await;
    println!("{reply}");
    Ok(())
}

// ── Content studio ──────────────────────────────────────────────────────

pub async fn run_compose(settings: &Settings, topic: &str, tone: &str) -> Result<()> {
    let tone = tone.parse::<Tone>().map_err(|_| {
        let known: Vec<&str> = Tone::all().iter().map(|t| t.label()).collect();
        anyhow::anyhow!("Unknown tone '{tone}'. Choose one of: {}", known.join(", "))
    })?;

    let studio = ContentStudio::new(settings.build_relay()?)
        .with_system_context(settings.studio.system_context.clone());
    let request = ContentRequest::new(topic, tone);

    eprintln!("Drafting {} piece about {topic}...", tone.label());
    let draft = studio.compose(&request).await?;
    println!("{draft}");
    Ok(())
}

// ── Interactive chat ────────────────────────────────────────────────────

pub async fn run_chat(settings: &Settings) -> Result<()> {
    let history_mode = if settings.assistant.include_transcript {
        HistoryMode::Transcript
    } else {
        HistoryMode::Stateless
    };
    let mut session =
        ConversationSession::new(settings.build_relay()?, settings.assistant.system_context.clone())
            .with_history_mode(history_mode)
            .with_transcript_limit(settings.assistant.max_transcript_messages);
    session.initialize(settings.assistant.greeting.clone());
    tracing::info!(session = %session.id(), "Chat session started");

    print_bubble(Sender::Assistant, &settings.assistant.greeting);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt_marker();
        let Some(line) = next_input(&mut lines, tokio::signal::ctrl_c()).await? else {
            break;
        };

        match commands::handle_command(&line) {
            CommandResult::NotACommand => {}
            CommandResult::Quit => break,
            CommandResult::Clear => {
                session.initialize(settings.assistant.greeting.clone());
                print_bubble(Sender::Assistant, &settings.assistant.greeting);
                continue;
            }
            CommandResult::ShowHistory => {
                for message in session.messages() {
                    print_bubble(message.role(), message.text());
                }
                continue;
            }
            CommandResult::ShowStatus => {
                println!(
                    "session {} | {} messages | memory: {:?} | endpoint: {}",
                    session.id(),
                    session.len(),
                    session.history_mode(),
                    settings.relay.endpoint
                );
                continue;
            }
            CommandResult::Message(msg) => {
                println!("{msg}");
                continue;
            }
        }

        let turn = match session.begin_turn(&line) {
            Ok(turn) => turn,
            Err(ImpactError::InvalidInput) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        eprintln!("Thinking...");
        let relay = session.relay().clone();
        // A pending turn cannot be cancelled; Ctrl-C ends the session.
        let reply = tokio::select! {
            reply = relay.generate_request(turn.request()) => reply,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("(interrupted)");
                break;
            }
        };

        session.finish_turn(turn, reply);
        if let Some(message) = session.last_message() {
            print_bubble(message.role(), message.text());
        }
    }

    tracing::info!(session = %session.id(), messages = session.len(), "Chat session closed");
    Ok(())
}

/// Read the next line, or `None` on end of input or once `interrupt`
/// resolves. The interrupt is re-armed on every call.
pub async fn next_input<R, I>(lines: &mut Lines<R>, interrupt: I) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    I: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        line = lines.next_line() => Ok(line?),
        _ = interrupt => Ok(None),
    }
}

fn prompt_marker() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_bubble(role: Sender, text: &str) {
    println!("[{}] {text}", role.label());
}
