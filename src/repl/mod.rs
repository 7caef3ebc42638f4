//! Interactive chat session loop
//!
//! Owns the configuration and the conversation history. Dispatches
//! reserved commands, enforces per-message constraints, and turns every
//! API outcome, success or classified failure, into a visible turn.

pub mod commands;
pub mod display;
pub mod input;

use crate::config::Config;
use crate::errors::{ChatError, InputError};
use crate::gemini::client::AskClient;
use crate::history::{ConversationTurn, History};
use anyhow::Result;

pub use commands::Command;
pub use display::DisplayManager;
pub use input::InputHandler;

/// What the loop should do after handling one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Interactive chat session.
///
/// The history buffer belongs to this session alone; nothing else
/// mutates it, and it is never sent back to the API.
pub struct ChatSession {
    config: Config,
    history: History,
    display: DisplayManager,
}

impl ChatSession {
    pub fn new(config: Config) -> Self {
        let history = History::new(config.max_history_length);

        ChatSession {
            config,
            history,
            display: DisplayManager::new(),
        }
    }

    /// Run the interactive loop until exit, EOF, or interrupt.
    ///
    /// Validation runs once up front: with a non-empty error list the
    /// loop never starts and the list goes back to the caller.
    pub async fn run(&mut self, client: &dyn AskClient) -> Result<()> {
        let errors = self.config.validate_settings();
        if !errors.is_empty() {
            return Err(ChatError::ConfigInvalid(errors).into());
        }

        let mut input = InputHandler::new()?;
        self.display.show_banner(&self.config);

        loop {
            let line = match input.read_line()? {
                Some(line) => line,
                // EOF or interrupt: terminate, no further I/O
                None => break,
            };

            if self.handle_line(&line, client).await == Control::Exit {
                break;
            }
        }

        self.display.show_goodbye();
        Ok(())
    }

    /// Dispatch one line of input. Reserved commands never reach the
    /// API client; blank input is ignored.
    pub async fn handle_line(&mut self, line: &str, client: &dyn AskClient) -> Control {
        match Command::parse(line) {
            Command::Exit => Control::Exit,
            Command::Blank => Control::Continue,
            Command::ClearHistory => {
                self.history.clear();
                let _ = self.display.clear_screen();
                self.display.show_banner(&self.config);
                self.display.show_transcript(&self.history);
                Control::Continue
            }
            Command::Help => {
                self.display.show_help(&self.config);
                Control::Continue
            }
            Command::Status => {
                self.display.show_status(&self.config, &self.history);
                Control::Continue
            }
            Command::Question(question) => {
                let turn = self.answer_question(&question, client).await;
                self.display.show_turn(&turn);
                self.history.append(turn);
                Control::Continue
            }
        }
    }

    /// Produce one turn for a question: local validation first, then a
    /// single API call. A rejected or failed question still becomes a
    /// turn so the user sees the outcome inline; failures never
    /// propagate past this method.
    async fn answer_question(&mut self, question: &str, client: &dyn AskClient) -> ConversationTurn {
        if let Err(err) = self.validate_question(question) {
            return ConversationTurn::new(question, err.to_string());
        }

        self.display.start_thinking();
        let outcome = client.ask(question).await;
        self.display.finish_thinking();

        let answer = match outcome {
            Ok(text) => text,
            Err(failure) => failure.to_string(),
        };

        ConversationTurn::new(question, answer)
    }

    /// Per-message constraints, checked before any network call.
    fn validate_question(&self, question: &str) -> std::result::Result<(), InputError> {
        if question.trim().is_empty() {
            return Err(InputError::Empty);
        }

        let length = question.chars().count();
        if length > self.config.max_message_length {
            return Err(InputError::TooLong {
                length,
                max: self.config.max_message_length,
            });
        }

        Ok(())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: Some(format!("AIza{}", "a".repeat(35))),
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_question_length_limit() {
        let mut config = test_config();
        config.max_message_length = 10;
        let session = ChatSession::new(config);

        assert!(session.validate_question("short").is_ok());
        assert_eq!(
            session.validate_question("much too long for the limit"),
            Err(InputError::TooLong {
                length: 27,
                max: 10
            })
        );
    }

    #[test]
    fn test_validate_question_rejects_blank() {
        let session = ChatSession::new(test_config());
        assert_eq!(session.validate_question("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_history_capacity_comes_from_config() {
        let mut config = test_config();
        config.max_history_length = 7;
        let session = ChatSession::new(config);
        assert_eq!(session.history().capacity(), 7);
    }
}
