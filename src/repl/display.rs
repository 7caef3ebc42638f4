//! Terminal presentation for the chat loop
//!
//! All rendering lives here. The engine hands over plain strings; no
//! formatting directives travel through the core types.

use crate::config::Config;
use crate::history::{ConversationTurn, History};
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// How many turns the status and transcript views show at most
const DISPLAY_WINDOW: usize = 10;

/// Display manager for the chat UI
pub struct DisplayManager {
    spinner: Option<ProgressBar>,
    tick_interval: Duration,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            spinner: None,
            tick_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, config: &Config) {
        let width = 64;

        println!("\n{}", "=".repeat(width).cyan());
        println!(
            "{}",
            format!("  {} v{} - Gemini Terminal Chat", config.app_name, config.app_version)
                .bold()
                .cyan()
        );
        println!(
            "{}",
            format!(
                "  Max message: {} chars | History: {} turns",
                config.max_message_length, config.max_history_length
            )
            .dimmed()
        );
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Type a question (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Start the in-flight indicator. Cosmetic only; the call itself
    /// blocks until it completes or times out.
    pub fn start_thinking(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.magenta} Gemini is thinking...")
                .unwrap(),
        );
        pb.enable_steady_tick(self.tick_interval);
        self.spinner = Some(pb);
    }

    /// Clear the in-flight indicator
    pub fn finish_thinking(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Render one completed turn
    pub fn show_turn(&self, turn: &ConversationTurn) {
        println!("{} {}", "You:".blue().bold(), turn.question);
        println!("{} {}", "Gemini:".magenta().bold(), turn.answer);
        println!();
    }

    /// Render the most recent turns in chronological order
    pub fn show_transcript(&self, history: &History) {
        if history.is_empty() {
            println!("{}\n", "No conversation yet. Ask something!".dimmed());
            return;
        }

        for turn in history.recent_window(DISPLAY_WINDOW) {
            self.show_turn(turn);
        }
    }

    /// Display the command reference and current limits
    pub fn show_help(&self, config: &Config) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/exit, exit, quit, /quit", "Exit the application"),
            ("/clear", "Clear the conversation history"),
            ("/help, help", "Show this help message"),
            ("/status", "Show current configuration"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<28} {}", cmd.green(), desc);
        }

        println!("\n{}", "Current settings:".bold());
        println!("  Max message length: {} chars", config.max_message_length);
        println!("  History capacity:   {} turns", config.max_history_length);
        println!("  Temperature:        {}", config.generation.temperature);
        println!(
            "  Max output tokens:  {}",
            config.generation.max_output_tokens
        );
        println!();
    }

    /// Display configuration and key presence. The key value itself is
    /// never printed.
    pub fn show_status(&self, config: &Config, history: &History) {
        println!("\n{}", "Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let key_status = if config.is_valid() {
            "set".green()
        } else {
            "missing or invalid".red()
        };

        println!("  {:<20} {}", "App:", config.user_agent());
        println!("  {:<20} {}", "API key:", key_status);
        println!(
            "  {:<20} {}/{}",
            "History:",
            history.len(),
            history.capacity()
        );
        println!(
            "  {:<20} {} chars",
            "Max message:", config.max_message_length
        );
        println!("  {:<20} {}s", "Request timeout:", config.api_timeout_secs);
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display goodbye message
    pub fn show_goodbye(&self) {
        println!("{}", "Goodbye!".green());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
