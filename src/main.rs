//! gemichat - Main CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use gemichat::cli::Args;
use gemichat::config::Config;
use gemichat::gemini::client::GeminiClient;
use gemichat::repl::ChatSession;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };
    args.apply_to(&mut config);

    let errors = config.validate_settings();
    if !errors.is_empty() {
        report_config_errors(&errors);
        return ExitCode::FAILURE;
    }

    let client = match GeminiClient::new(config.clone()) {
        Ok(client) => client,
        Err(failure) => {
            eprintln!("{} {}", "Error:".red().bold(), failure);
            return ExitCode::FAILURE;
        }
    };

    let mut session = ChatSession::new(config);
    match session.run(&client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn report_config_errors(errors: &[String]) {
    eprintln!("{}", "Configuration errors:".red().bold());
    for error in errors {
        eprintln!("  {} {}", "-".red(), error);
    }

    let config_hint = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.gemichat/config.toml".to_string());
    eprintln!(
        "\n{}",
        format!("Set GEMINI_API_KEY in your environment or edit {}.", config_hint).yellow()
    );
}
