use std::path::Path;
use crate::services::process_runner::{CommandRunner, ExternalOutcome, Invocation};

/// VS Code (or a compatible launcher) driven through its CLI.
///
/// Both calls are best effort: they warn and carry on, and return `None`
/// when the command exists but could not be started.
pub struct Editor<'a> {
    runner: &'a dyn CommandRunner,
    command: &'a str,
}

impl<'a> Editor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, command: &'a str) -> Self {
        Self { runner, command }
    }

    /// Install `extension`. Never fails the run.
    pub async fn ensure_extension(&self, extension: &str) -> Option<ExternalOutcome> {
        let invocation = Invocation::new(self.command, ["--install-extension", extension]);
        let outcome = match self.runner.run(&invocation).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Warning: Failed to install VS Code extension {extension} ({e}).");
                return None;
            }
        };

        match outcome {
            ExternalOutcome::Succeeded => {
                println!("Ensured VS Code extension {extension} is installed.");
            }
            ExternalOutcome::ExitedWithFailure(_) => {
                eprintln!("Warning: Failed to install VS Code extension {extension} ({}).", outcome.describe());
            }
            ExternalOutcome::NotFound => {
                eprintln!("Warning: Could not find '{}'. Skipping extension check.", self.command);
            }
        }

        Some(outcome)
    }

    /// Open `project` in the editor. Waits for the launcher only, not the window.
    pub async fn launch(&self, project: &Path) -> Option<ExternalOutcome> {
        let invocation = Invocation::new(self.command, [project.as_os_str()]);
        let outcome = match self.runner.run(&invocation).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Warning: Could not start '{}' ({e}). Please open {} manually.", self.command, project.display());
                return None;
            }
        };

        if outcome == ExternalOutcome::NotFound {
            eprintln!("Warning: Could not find '{}' command. Please open {} manually.", self.command, project.display());
        } else {
            if let ExternalOutcome::ExitedWithFailure(_) = outcome {
                tracing::debug!(outcome = %outcome.describe(), "editor launcher exited non-zero");
            }
            println!("Project opened in VS Code.");
        }

        Some(outcome)
    }
}
