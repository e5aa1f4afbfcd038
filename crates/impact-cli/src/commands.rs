/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Reset the chat to the greeting.
    Clear,
    /// Quit the application.
    Quit,
    /// Print the transcript so far.
    ShowHistory,
    /// Show session status (message count, memory mode, endpoint).
    ShowStatus,
    /// Not a command - treat as regular input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return CommandResult::NotACommand;
    }
    let cmd = trimmed.split_whitespace().next().unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" | "/new" => CommandResult::Clear,
        "/history" => CommandResult::ShowHistory,
        "/status" => CommandResult::ShowStatus,
        other => CommandResult::Message(format!(
            "Unknown command: {other}. Type /help for available commands."
        )),
    }
}

fn show_help() -> CommandResult {
    CommandResult::Message(
        "Impact Assistant Commands:\n\
         \x20 /help, /h       Show this help\n\
         \x20 /clear, /new    Start over from the greeting\n\
         \x20 /history        Show the conversation so far\n\
         \x20 /status         Show session status\n\
         \x20 /exit, /q       Quit\n\
         Anything else is sent to the assistant."
            .into(),
    )
}
