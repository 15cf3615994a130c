use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::process::Command;

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    /// Working directory for the child; inherits ours when `None`
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How an external command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalOutcome {
    Succeeded,
    /// The command ran but exited non-zero; `None` when killed by a signal
    ExitedWithFailure(Option<i32>),
    /// The program is not on PATH
    NotFound,
}

impl ExternalOutcome {
    fn from_status(status: std::process::ExitStatus) -> Self {
        if status.success() {
            Self::Succeeded
        } else {
            Self::ExitedWithFailure(status.code())
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Succeeded => "succeeded".to_string(),
            Self::ExitedWithFailure(Some(code)) => format!("exit status {code}"),
            Self::ExitedWithFailure(None) => "terminated by signal".to_string(),
            Self::NotFound => "command not found".to_string(),
        }
    }
}

/// Runs external commands. Swapped out in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion with inherited stdio
    async fn run(&self, invocation: &Invocation) -> io::Result<ExternalOutcome>;
}

/// Spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ExternalOutcome> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "spawning");
        match Self::command(invocation).status().await {
            Ok(status) => {
                let outcome = ExternalOutcome::from_status(status);
                tracing::debug!(command = %invocation, outcome = %outcome.describe(), "finished");
                Ok(outcome)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ExternalOutcome::NotFound),
            Err(e) => Err(e),
        }
    }
}
