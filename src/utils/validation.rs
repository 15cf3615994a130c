// Common validation utilities for pynew

use crate::utils::error::{Result, SetupError};

/// Characters rejected by at least one common filesystem
const RESERVED_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Validate a project name before it is joined onto the base directory.
///
/// The name becomes a single directory component, so anything that could
/// escape the base directory or confuse the spawned tools is refused.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SetupError::ValidationError(
            "Project name is required.".to_string()
        ));
    }

    if name == "." || name == ".." {
        return Err(SetupError::ValidationError(
            format!("Invalid project name '{name}' - cannot be a directory reference.")
        ));
    }

    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(SetupError::ValidationError(
            format!("Invalid project name '{name}' - cannot contain '{c}'.\n\nValid project names:\n  ✓ demo\n  ✓ my-app\n  ✗ ../demo\n  ✗ nested/demo")
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(SetupError::ValidationError(
            format!("Invalid project name {name:?} - cannot contain control characters.")
        ));
    }

    // Would be read as an option by git and the editor
    if name.starts_with('-') {
        return Err(SetupError::ValidationError(
            format!("Invalid project name '{name}' - cannot start with '-'.")
        ));
    }

    Ok(())
}
