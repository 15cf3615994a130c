// Models module for data structures
pub mod config;
pub mod project;
pub mod step;

pub use config::{SetupConfig, TemplatePaths};
pub use project::{ProjectLayout, ProjectName};
pub use step::{Step, StepOutcome};
