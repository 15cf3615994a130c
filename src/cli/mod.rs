// CLI module for command-line interface

pub mod new;

use clap::Parser;
use crate::services::process_runner::SystemRunner;
use crate::utils::error::Result;

use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "pynew")]
#[command(about = "Scaffold a new Python project")]
#[command(long_about = r#"pynew creates a ready-to-use Python project in one go:

  • a project folder under the base directory (default /opt/python)
  • a virtual environment in venv/
  • a starter main.py
  • .gitignore, venv/bin/activate additions and .vscode/ settings
    copied from templates in the current directory
  • a git repository
  • the project opened in VS Code

Templates (all optional, looked up in --template-dir):
  gitignore.txt        copied to .gitignore
  activate.txt         appended to venv/bin/activate
  settings.json.txt    copied to .vscode/settings.json
  tasks.json.txt       copied to .vscode/tasks.json

Examples:
  pynew                          Prompt for a project name
  pynew demo                     Create /opt/python/demo
  pynew demo --base-dir ~/src    Create ~/src/demo
  pynew demo --no-editor         Skip VS Code entirely

Refuses to run from inside an activated virtual environment."#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: NewCommand,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line against real processes
    pub async fn execute(cli: Cli) -> Result<()> {
        cli.command.run(&SystemRunner).await
    }
}
