// Verbatim template copying; no interpolation of any kind

use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use crate::utils::error::Result;

/// Written before appended template text
pub const APPEND_SEPARATOR: &str = "\n# --- Appended by setup ---\n";

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}

/// Copy `template` to `destination` as-is.
///
/// Returns `false` without touching `destination` when the template is missing.
pub async fn copy_template(template: &Path, destination: &Path) -> Result<bool> {
    if !is_file(template).await {
        return Ok(false);
    }

    let content = fs::read(template).await?;
    fs::write(destination, content).await?;
    Ok(true)
}

/// Append the separator and `template` to the end of `target`.
///
/// Returns `false` and leaves `target` alone when either file is missing.
pub async fn append_template(template: &Path, target: &Path) -> Result<bool> {
    if !is_file(template).await || !is_file(target).await {
        return Ok(false);
    }

    let content = fs::read(template).await?;
    let mut file = fs::OpenOptions::new().append(true).open(target).await?;
    file.write_all(APPEND_SEPARATOR.as_bytes()).await?;
    file.write_all(&content).await?;
    file.flush().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_copy_template_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("gitignore.txt");
        let destination = temp_dir.path().join(".gitignore");
        std::fs::write(&template, "*.pyc\n__pycache__/\nvenv/").unwrap();

        assert!(copy_template(&template, &destination).await.unwrap());
        assert_eq!(
            std::fs::read_to_string(&destination).unwrap(),
            "*.pyc\n__pycache__/\nvenv/"
        );
    }

    #[tokio::test]
    async fn test_copy_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join(".gitignore");

        assert!(!copy_template(&temp_dir.path().join("nope.txt"), &destination).await.unwrap());
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_copy_template_directory_counts_as_missing() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("settings.json.txt");
        std::fs::create_dir(&template).unwrap();
        let destination = temp_dir.path().join("settings.json");

        assert!(!copy_template(&template, &destination).await.unwrap());
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_append_template() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("activate.txt");
        let target = temp_dir.path().join("activate");
        std::fs::write(&template, "export FOO=1").unwrap();
        std::fs::write(&target, "# original\ndeactivate () {\n}\n").unwrap();

        assert!(append_template(&template, &target).await.unwrap());
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "# original\ndeactivate () {\n}\n\n# --- Appended by setup ---\nexport FOO=1"
        );
    }

    #[tokio::test]
    async fn test_templates_are_copied_as_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("gitignore.txt");
        let destination = temp_dir.path().join(".gitignore");
        std::fs::write(&template, b"caf\xe9\r\n").unwrap();

        assert!(copy_template(&template, &destination).await.unwrap());
        assert_eq!(std::fs::read(&destination).unwrap(), b"caf\xe9\r\n");

        let target = temp_dir.path().join("activate");
        std::fs::write(&target, b"# original\n").unwrap();
        assert!(append_template(&template, &target).await.unwrap());

        let mut expected = b"# original\n".to_vec();
        expected.extend_from_slice(APPEND_SEPARATOR.as_bytes());
        expected.extend_from_slice(b"caf\xe9\r\n");
        assert_eq!(std::fs::read(&target).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_append_skips_when_target_missing() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("activate.txt");
        let target = temp_dir.path().join("activate");
        std::fs::write(&template, "export FOO=1").unwrap();

        assert!(!append_template(&template, &target).await.unwrap());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_append_skips_when_template_missing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("activate");
        std::fs::write(&target, "# original\n").unwrap();

        assert!(!append_template(&temp_dir.path().join("activate.txt"), &target).await.unwrap());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# original\n");
    }
}
