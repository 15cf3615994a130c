use std::fmt;
use crate::utils::error::SetupError;

/// One stage of project creation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateDirectory,
    CreateVirtualEnv,
    WriteStarterFile,
    WriteGitignore,
    AppendActivateScript,
    CreateEditorDir,
    WriteEditorSettings,
    WriteEditorTasks,
    InitGit,
    OpenEditor,
}

impl Step {
    /// All steps in the order they run
    pub const ALL: [Self; 10] = [
        Self::CreateDirectory,
        Self::CreateVirtualEnv,
        Self::WriteStarterFile,
        Self::WriteGitignore,
        Self::AppendActivateScript,
        Self::CreateEditorDir,
        Self::WriteEditorSettings,
        Self::WriteEditorTasks,
        Self::InitGit,
        Self::OpenEditor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateDirectory => "create project directory",
            Self::CreateVirtualEnv => "create virtual environment",
            Self::WriteStarterFile => "write starter file",
            Self::WriteGitignore => "write .gitignore",
            Self::AppendActivateScript => "append to activate script",
            Self::CreateEditorDir => "create .vscode directory",
            Self::WriteEditorSettings => "write VS Code settings",
            Self::WriteEditorTasks => "write VS Code tasks",
            Self::InitGit => "initialize git repository",
            Self::OpenEditor => "open editor",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened when a step ran
#[derive(Debug)]
pub enum StepOutcome {
    Completed,
    /// An optional input was missing; the run continues
    SkippedMissingInput(String),
    /// The run stops here
    FailedFatal(SetupError),
}

impl StepOutcome {
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedMissingInput(_))
    }
}
