use clap::Args;
use std::io;
use std::path::PathBuf;
use crate::models::config::SetupConfig;
use crate::models::project::{ProjectLayout, ProjectName};
use crate::models::step::Step;
use crate::services::editor::Editor;
use crate::services::environment_guard::EnvironmentGuard;
use crate::services::process_runner::CommandRunner;
use crate::services::project_creator::ProjectCreator;
use crate::utils::error::{Result, SetupError};
use crate::utils::prompt::ask;

pub const NAME_PROMPT: &str = "Enter new project name: ";

/// Create a new Python project with a virtual environment, git and VS Code settings
#[derive(Debug, Default, Args)]
pub struct NewCommand {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Directory new projects are created under
    #[arg(long, env = "PYNEW_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory holding gitignore.txt, activate.txt, settings.json.txt and tasks.json.txt
    #[arg(long, env = "PYNEW_TEMPLATE_DIR", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Editor command used to install the Python extension and open the project
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// Python interpreter used to create the virtual environment
    #[arg(long, value_name = "COMMAND")]
    pub python: Option<String>,

    /// Don't install the editor extension or open the editor
    #[arg(long)]
    pub no_editor: bool,
}

impl NewCommand {
    /// Build the run configuration from defaults and overrides
    pub fn config(&self) -> SetupConfig {
        let mut config = SetupConfig::default();
        if let Some(base_dir) = &self.base_dir {
            config = config.with_base_dir(base_dir);
        }
        if let Some(dir) = &self.template_dir {
            config = config.with_template_dir(dir);
        }
        if let Some(editor) = &self.editor {
            config = config.with_editor_command(editor);
        }
        if let Some(python) = &self.python {
            config = config.with_python_command(python);
        }
        if self.no_editor {
            config = config.without_editor();
        }
        config
    }

    /// Execute the new command
    pub async fn run(&self, runner: &dyn CommandRunner) -> Result<()> {
        let virtual_env = std::env::var("VIRTUAL_ENV").ok();
        self.run_with_env(runner, virtual_env.as_deref()).await
    }

    /// Execute with an explicit `VIRTUAL_ENV` value
    pub async fn run_with_env(&self, runner: &dyn CommandRunner, virtual_env: Option<&str>) -> Result<()> {
        let config = self.config();

        // Before any prompt or side effect
        EnvironmentGuard::new(&config.python_command).check(virtual_env)?;

        let raw_name = match &self.name {
            Some(name) => name.clone(),
            None => Self::read_name()?,
        };

        let Some(name) = ProjectName::parse(&raw_name)? else {
            println!("Project name is required.");
            return Ok(());
        };

        if config.use_editor {
            Editor::new(runner, &config.editor_command)
                .ensure_extension(&config.editor_extension)
                .await;
        }

        match ProjectCreator::new(&config, runner).create(&name).await {
            Ok(report) => {
                println!("Project {} is ready at {}", name, report.layout.root.display());
                if let Some(line) = skipped_line(&report.skipped()) {
                    println!("{line}");
                }
                Ok(())
            }
            Err(SetupError::ProjectExists(path)) => {
                tracing::debug!(path = %path.display(), "project directory already present");
                println!("Project already exists.");
                Ok(())
            }
            Err(err) => {
                let layout = ProjectLayout::new(&config, &name);
                if layout.root.exists() {
                    eprintln!("Partially created project left at {}", layout.root.display());
                }
                Err(err)
            }
        }
    }

    fn read_name() -> Result<String> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        ask(NAME_PROMPT, &mut input, &mut output)
    }
}

/// `Skipped: write .gitignore, open editor`, or `None` when nothing was skipped
fn skipped_line(skipped: &[Step]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    let labels: Vec<&str> = skipped.iter().map(|step| step.label()).collect();
    Some(format!("Skipped: {}", labels.join(", ")))
}
