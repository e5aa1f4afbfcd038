use impact_cli::commands::{handle_command, CommandResult};

// ========================================================================
// Command Parsing Tests (commands.rs)
// ========================================================================

#[test]
fn test_help_command() {
    let result = handle_command("/help");

    if let CommandResult::Message(msg) = result {
        assert!(msg.contains("Impact Assistant Commands"));
        assert!(msg.contains("/history"));
    } else {
        panic!("expected help message");
    }
}

#[test]
fn test_help_command_short_alias() {
    assert!(matches!(handle_command("/h"), CommandResult::Message(_)));
}

#[test]
fn test_quit_aliases() {
    for cmd in ["/exit", "/quit", "/q"] {
        assert_eq!(handle_command(cmd), CommandResult::Quit, "{cmd}");
    }
}

#[test]
fn test_clear_aliases() {
    assert_eq!(handle_command("/clear"), CommandResult::Clear);
    assert_eq!(handle_command("/new"), CommandResult::Clear);
}

#[test]
fn test_history_and_status() {
    assert_eq!(handle_command("/history"), CommandResult::ShowHistory);
    assert_eq!(handle_command("/status"), CommandResult::ShowStatus);
}

#[test]
fn test_command_tolerates_surrounding_whitespace() {
    assert_eq!(handle_command("  /quit  "), CommandResult::Quit);
    assert_eq!(handle_command("/status extra"), CommandResult::ShowStatus);
}

#[test]
fn test_unknown_command() {
    match handle_command("/donate") {
        CommandResult::Message(msg) => assert!(msg.contains("Unknown command: /donate")),
        other => panic!("expected message, got {other:?}"),
    }
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert_eq!(handle_command("How do I donate?"), CommandResult::NotACommand);
    assert_eq!(handle_command(""), CommandResult::NotACommand);
    assert_eq!(handle_command("a/b"), CommandResult::NotACommand);
}
