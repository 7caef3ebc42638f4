//! Command-line argument parsing
//!
//! Flags override whatever the config file and environment provided.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// gemichat - chat with Gemini from your terminal
#[derive(Parser, Debug)]
#[command(name = "gemichat")]
#[command(version)]
#[command(about = "Interactive terminal chat client for the Gemini API", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.gemichat/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Maximum output tokens per answer
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Maximum turns kept in the conversation history
    #[arg(long)]
    pub max_history: Option<usize>,
}

impl Args {
    /// Fold CLI overrides into a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(timeout) = self.timeout {
            config.api_timeout_secs = timeout;
        }
        if let Some(temperature) = self.temperature {
            config.generation.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.generation.max_output_tokens = max_tokens;
        }
        if let Some(max_history) = self.max_history {
            config.max_history_length = max_history;
        }
    }
}
