//! # Contactz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only invokes
//! `cli::run()` and turns its outcome into an exit code.

mod cli;

use colored::Colorize;
use contactz::api::MessageLevel;

fn main() {
    if let Err(e) = cli::run() {
        let code = match e.level() {
            MessageLevel::Info => {
                println!("{}", e.to_string().dimmed());
                0
            }
            MessageLevel::Warning => {
                eprintln!("{}", e.to_string().yellow());
                1
            }
            _ => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                1
            }
        };
        std::process::exit(code);
    }
}
