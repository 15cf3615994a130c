use std::fmt;
use std::path::PathBuf;
use crate::models::config::SetupConfig;
use crate::utils::error::Result;
use crate::utils::validation::validate_project_name;

/// Starter file written into every new project
pub const STARTER_FILE: &str = "main.py";
/// Contents of the starter file
pub const STARTER_SOURCE: &str = "print(\"Hello from your new project!\")\n";
/// Editor configuration directory
pub const EDITOR_DIR: &str = ".vscode";

/// A validated project name, used as a single directory component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Trim and validate user input.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only input so the caller
    /// can report the missing name without treating it as a failure.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let name = raw.trim();
        if name.is_empty() {
            return Ok(None);
        }
        validate_project_name(name)?;
        Ok(Some(Self(name.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every path the scaffolder touches for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub venv_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(config: &SetupConfig, name: &ProjectName) -> Self {
        let root = config.base_dir.join(name.as_str());
        let venv_dir = root.join(&config.venv_dir_name);
        Self { root, venv_dir }
    }

    pub fn starter_file(&self) -> PathBuf {
        self.root.join(STARTER_FILE)
    }

    pub fn gitignore(&self) -> PathBuf {
        self.root.join(".gitignore")
    }

    /// Activation script generated by `python -m venv`
    pub fn activate_script(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir.join("Scripts").join("activate.bat")
        } else {
            self.venv_dir.join("bin").join("activate")
        }
    }

    pub fn editor_dir(&self) -> PathBuf {
        self.root.join(EDITOR_DIR)
    }

    pub fn editor_settings(&self) -> PathBuf {
        self.editor_dir().join("settings.json")
    }

    pub fn editor_tasks(&self) -> PathBuf {
        self.editor_dir().join("tasks.json")
    }

    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }
}
