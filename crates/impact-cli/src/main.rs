use anyhow::Result;
use clap::{Parser, Subcommand};
use impact_cli::app;

#[derive(Parser)]
#[command(name = "impact")]
#[command(about = "Impact Assistant - donor chat and content studio")]
#[command(version)]
struct Cli {
    /// Text-generation endpoint URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Environment variable holding the API key
    #[arg(long, global = true)]
    api_key_env: Option<String>,

    /// Send prior turns along with each chat query
    #[arg(long, global = true)]
    transcript: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Chat with the assistant (default)
    Chat,
    /// Ask a single question and exit
    Ask {
        /// The question to send
        query: Vec<String>,
    },
    /// Draft donor-facing content
    Compose {
        /// What the piece is about
        #[arg(short, long)]
        topic: String,
        /// professional, urgent, gratitude or social
        #[arg(long, default_value = "professional")]
        tone: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = impact_core::Settings::load();

    if let Some(endpoint) = cli.endpoint {
        settings.relay.endpoint = endpoint;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        settings.relay.timeout_ms = timeout_ms;
    }
    if let Some(api_key_env) = cli.api_key_env {
        settings.relay.api_key_env = api_key_env;
    }
    if cli.transcript {
        settings.assistant.include_transcript = true;
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => app::run_chat(&settings).await?,
        Command::Ask { query } => app::run_single_prompt(&settings, &query.join(" ")).await?,
        Command::Compose { topic, tone } => app::run_compose(&settings, &topic, &tone).await?,
    }

    Ok(())
}
