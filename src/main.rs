use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use monkey::{repl, Environment};

/// The Monkey programming language interpreter.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Script to run; starts an interactive session when omitted.
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.path {
        None => {
            println!("Hello! This is the Monkey programming language!");
            println!("Feel free to type in commands");
            repl::start();
        }
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;

            let mut env = Environment::new();
            repl::run(source, &mut env);
        }
    }

    Ok(())
}
