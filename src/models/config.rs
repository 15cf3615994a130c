use std::path::{Path, PathBuf};

/// Project root used when no base directory is given
pub const DEFAULT_BASE_DIR: &str = "/opt/python";
/// Editor launcher command
pub const DEFAULT_EDITOR_COMMAND: &str = "code";
/// Extension installed into the editor before scaffolding
pub const DEFAULT_EDITOR_EXTENSION: &str = "ms-python.python";
/// Version control command
pub const DEFAULT_GIT_COMMAND: &str = "git";
/// Environment directory created inside each project
pub const DEFAULT_VENV_DIR: &str = "venv";

pub const GITIGNORE_TEMPLATE: &str = "gitignore.txt";
pub const ACTIVATE_APPEND_TEMPLATE: &str = "activate.txt";
pub const SETTINGS_TEMPLATE: &str = "settings.json.txt";
pub const TASKS_TEMPLATE: &str = "tasks.json.txt";

/// Default Python launcher for the current platform
pub fn default_python_command() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Locations of the four optional template files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePaths {
    /// Copied to `.gitignore`
    pub gitignore: PathBuf,
    /// Appended to the environment's activation script
    pub activate_append: PathBuf,
    /// Copied to `.vscode/settings.json`
    pub settings: PathBuf,
    /// Copied to `.vscode/tasks.json`
    pub tasks: PathBuf,
}

impl TemplatePaths {
    /// Resolve the fixed template file names against `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            gitignore: dir.join(GITIGNORE_TEMPLATE),
            activate_append: dir.join(ACTIVATE_APPEND_TEMPLATE),
            settings: dir.join(SETTINGS_TEMPLATE),
            tasks: dir.join(TASKS_TEMPLATE),
        }
    }
}

impl Default for TemplatePaths {
    /// Templates are looked up relative to the working directory, not the project
    fn default() -> Self {
        Self {
            gitignore: PathBuf::from(GITIGNORE_TEMPLATE),
            activate_append: PathBuf::from(ACTIVATE_APPEND_TEMPLATE),
            settings: PathBuf::from(SETTINGS_TEMPLATE),
            tasks: PathBuf::from(TASKS_TEMPLATE),
        }
    }
}

/// Everything the scaffolder needs to know, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Directory new projects are created under
    pub base_dir: PathBuf,
    /// Editor command used to install the extension and open the project
    pub editor_command: String,
    /// Extension identifier passed to `--install-extension`
    pub editor_extension: String,
    /// Whether to talk to the editor at all
    pub use_editor: bool,
    /// Python launcher used for `-m venv` and the environment guard
    pub python_command: String,
    /// Version control command
    pub git_command: String,
    /// Name of the environment directory inside the project
    pub venv_dir_name: String,
    pub templates: TemplatePaths,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            editor_command: DEFAULT_EDITOR_COMMAND.to_string(),
            editor_extension: DEFAULT_EDITOR_EXTENSION.to_string(),
            use_editor: true,
            python_command: default_python_command().to_string(),
            git_command: DEFAULT_GIT_COMMAND.to_string(),
            venv_dir_name: DEFAULT_VENV_DIR.to_string(),
            templates: TemplatePaths::default(),
        }
    }
}

impl SetupConfig {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_template_dir(mut self, dir: &Path) -> Self {
        self.templates = TemplatePaths::in_dir(dir);
        self
    }

    pub fn with_editor_command(mut self, command: impl Into<String>) -> Self {
        self.editor_command = command.into();
        self
    }

    pub fn with_python_command(mut self, command: impl Into<String>) -> Self {
        self.python_command = command.into();
        self
    }

    pub fn without_editor(mut self) -> Self {
        self.use_editor = false;
        self
    }
}
