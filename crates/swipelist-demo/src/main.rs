#![forbid(unsafe_code)]

//! Scripted walkthrough of a swipe-to-dismiss list.
//!
//! Set `RUST_LOG=debug` to watch the engine's structured events.

mod cli;
mod scenario;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();
    match scenario::run(&cli) {
        Ok(steps) => {
            for step in steps {
                println!("{}:", step.step);
                println!("  items: {}", step.items.join(", "));
                match step.popup {
                    Some((text, button)) => println!("  popup: {text} [{button}]"),
                    None => println!("  popup: hidden"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
