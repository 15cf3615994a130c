// Shared utilities: errors, validation, logging and prompting

pub mod error;
pub mod logging;
pub mod prompt;
pub mod validation;
