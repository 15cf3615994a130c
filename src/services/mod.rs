// Services: external processes, the environment guard and project creation
pub mod editor;
pub mod environment_guard;
pub mod process_runner;
pub mod project_creator;
pub mod templates;
