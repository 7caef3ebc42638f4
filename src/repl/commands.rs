//! Reserved command parsing for the chat loop
//!
//! Commands are matched before anything is sent to the API. Bare
//! `exit`, `quit`, and `help` are accepted alongside the slash forms.

/// What one line of input asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Terminate the session (`/exit`, `exit`, `quit`, `/quit`)
    Exit,
    /// Empty the conversation history (`/clear`)
    ClearHistory,
    /// Show the command reference (`/help`, `help`)
    Help,
    /// Show configuration and key presence (`/status`)
    Status,
    /// Whitespace-only input; ignored
    Blank,
    /// Anything else is a question for the API
    Question(String),
}

impl Command {
    /// Classify one line. Reserved words match case-insensitively;
    /// everything else passes through as a question.
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Command::Blank;
        }

        match trimmed.to_lowercase().as_str() {
            "/exit" | "exit" | "quit" | "/quit" => Command::Exit,
            "/clear" => Command::ClearHistory,
            "/help" | "help" => Command::Help,
            "/status" => Command::Status,
            _ => Command::Question(trimmed.to_string()),
        }
    }
}
