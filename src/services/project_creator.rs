use std::ffi::OsString;
use std::io;
use tokio::fs;
use crate::models::config::SetupConfig;
use crate::models::project::{ProjectLayout, ProjectName, STARTER_FILE, STARTER_SOURCE};
use crate::models::step::{Step, StepOutcome};
use crate::services::editor::Editor;
use crate::services::process_runner::{CommandRunner, ExternalOutcome, Invocation};
use crate::services::templates::{append_template, copy_template};
use crate::utils::error::{Result, SetupError};

/// Outcome of every step that ran, in order. Steps turned off by
/// configuration don't appear.
#[derive(Debug)]
pub struct CreationReport {
    pub layout: ProjectLayout,
    pub steps: Vec<(Step, StepOutcome)>,
}

impl CreationReport {
    pub fn skipped(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|(_, outcome)| outcome.is_skipped())
            .map(|(step, _)| *step)
            .collect()
    }
}

/// Creates a project by running [`Step::ALL`] in order
pub struct ProjectCreator<'a> {
    config: &'a SetupConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> ProjectCreator<'a> {
    pub fn new(config: &'a SetupConfig, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Run every step, stopping at the first fatal one.
    ///
    /// Nothing is rolled back: a fatal step leaves whatever the earlier
    /// steps produced on disk.
    pub async fn create(&self, name: &ProjectName) -> Result<CreationReport> {
        let layout = ProjectLayout::new(self.config, name);
        let mut steps = Vec::with_capacity(Step::ALL.len());

        for step in Step::ALL.into_iter().filter(|step| self.enabled(*step)) {
            tracing::debug!(%step, "running step");
            match self.run_step(step, &layout).await {
                StepOutcome::FailedFatal(err) => {
                    tracing::debug!(%step, error = %err, "step failed");
                    return Err(err);
                }
                outcome => steps.push((step, outcome)),
            }
        }

        Ok(CreationReport { layout, steps })
    }

    /// False for steps the configuration turns off
    pub const fn enabled(&self, step: Step) -> bool {
        !matches!(step, Step::OpenEditor) || self.config.use_editor
    }

    /// Run one step against `layout`, whether or not it is enabled
    pub async fn run_step(&self, step: Step, layout: &ProjectLayout) -> StepOutcome {
        let result = match step {
            Step::CreateDirectory => self.create_directory(layout).await,
            Step::CreateVirtualEnv => self.create_venv(layout).await,
            Step::WriteStarterFile => Self::write_starter_file(layout).await,
            Step::WriteGitignore => self.write_gitignore(layout).await,
            Step::AppendActivateScript => self.append_activate(layout).await,
            Step::CreateEditorDir => Self::create_editor_dir(layout).await,
            Step::WriteEditorSettings => self.write_editor_settings(layout).await,
            Step::WriteEditorTasks => self.write_editor_tasks(layout).await,
            Step::InitGit => self.init_git(layout).await,
            Step::OpenEditor => self.open_editor(layout).await,
        };

        result.unwrap_or_else(StepOutcome::FailedFatal)
    }

    async fn create_directory(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        if let Some(parent) = layout.root.parent() {
            fs::create_dir_all(parent).await?;
        }

        match fs::create_dir(&layout.root).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(SetupError::ProjectExists(layout.root.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        println!("Created project folder: {}", layout.root.display());
        Ok(StepOutcome::Completed)
    }

    async fn create_venv(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let invocation = Invocation::new(
            &self.config.python_command,
            [OsString::from("-m"), OsString::from("venv"), layout.venv_dir.clone().into_os_string()],
        );
        self.run_required(&invocation).await?;

        println!("Virtual environment created.");
        Ok(StepOutcome::Completed)
    }

    async fn write_starter_file(layout: &ProjectLayout) -> Result<StepOutcome> {
        fs::write(layout.starter_file(), STARTER_SOURCE).await?;
        println!("Created starter file {STARTER_FILE}.");
        Ok(StepOutcome::Completed)
    }

    async fn write_gitignore(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let template = &self.config.templates.gitignore;
        if copy_template(template, &layout.gitignore()).await? {
            println!(".gitignore created from template.");
            Ok(StepOutcome::Completed)
        } else {
            eprintln!("Warning: {} not found. Skipping .gitignore creation.", template.display());
            Ok(StepOutcome::SkippedMissingInput(template.display().to_string()))
        }
    }

    async fn append_activate(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let template = &self.config.templates.activate_append;
        let script = layout.activate_script();
        if append_template(template, &script).await? {
            println!("Appended {} to {}.", template.display(), script.display());
            Ok(StepOutcome::Completed)
        } else {
            eprintln!(
                "Warning: {} or {} not found. Skipping append.",
                template.display(),
                script.display()
            );
            Ok(StepOutcome::SkippedMissingInput(format!(
                "{} or {}",
                template.display(),
                script.display()
            )))
        }
    }

    async fn create_editor_dir(layout: &ProjectLayout) -> Result<StepOutcome> {
        fs::create_dir_all(layout.editor_dir()).await?;
        println!("Created {} directory.", layout.editor_dir().display());
        Ok(StepOutcome::Completed)
    }

    async fn write_editor_settings(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let template = &self.config.templates.settings;
        if copy_template(template, &layout.editor_settings()).await? {
            println!("VS Code settings.json created from {}.", template.display());
            Ok(StepOutcome::Completed)
        } else {
            eprintln!("Warning: {} not found. Skipping VS Code settings.", template.display());
            Ok(StepOutcome::SkippedMissingInput(template.display().to_string()))
        }
    }

    async fn write_editor_tasks(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let template = &self.config.templates.tasks;
        if copy_template(template, &layout.editor_tasks()).await? {
            println!("VS Code tasks.json created from {}.", template.display());
            Ok(StepOutcome::Completed)
        } else {
            eprintln!("Warning: {} not found. Skipping VS Code tasks.", template.display());
            Ok(StepOutcome::SkippedMissingInput(template.display().to_string()))
        }
    }

    async fn init_git(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let invocation = Invocation::new(&self.config.git_command, ["init"]).current_dir(&layout.root);
        self.run_required(&invocation).await?;

        println!("Git repository initialized.");
        Ok(StepOutcome::Completed)
    }

    async fn open_editor(&self, layout: &ProjectLayout) -> Result<StepOutcome> {
        let editor = Editor::new(self.runner, &self.config.editor_command);
        match editor.launch(&layout.root).await {
            Some(ExternalOutcome::NotFound) => Ok(StepOutcome::SkippedMissingInput(self.config.editor_command.clone())),
            // A launcher that exits non-zero or can't be started still leaves a usable project
            _ => Ok(StepOutcome::Completed),
        }
    }

    /// Run a command whose failure ends the whole run
    async fn run_required(&self, invocation: &Invocation) -> Result<()> {
        match self.runner.run(invocation).await? {
            ExternalOutcome::Succeeded => Ok(()),
            ExternalOutcome::NotFound => Err(SetupError::CommandNotFound(invocation.program.clone())),
            outcome => Err(SetupError::CommandFailed {
                command: invocation.to_string(),
                reason: outcome.describe(),
            }),
        }
    }
}
