//! gemichat - Terminal chat client for the Gemini API
//!
//! An interactive console chat that forwards questions to the Gemini
//! generative-language endpoint and renders the answers.
//!
//! # Architecture
//!
//! - **config**: layered configuration with full validation
//! - **gemini**: wire types, request builder, and the HTTP client
//! - **history**: bounded conversation buffer (FIFO eviction)
//! - **repl**: interactive session loop, commands, input, display
//! - **cli**: command-line argument parsing

pub mod cli;
pub mod config;
pub mod errors;
pub mod gemini;
pub mod history;
pub mod repl;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ApiFailure, ChatError, InputError};
pub use gemini::{AskClient, GeminiClient};
pub use history::{ConversationTurn, History};
pub use repl::ChatSession;
