// Contract tests for the `pynew` command line
// External tools are pointed at missing programs so no real python, git or
// editor is ever started.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

const MISSING_PYTHON: &str = "pynew-test-missing-python";
const MISSING_EDITOR: &str = "pynew-test-missing-editor";

fn pynew(base_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pynew").unwrap();
    cmd.env_remove("VIRTUAL_ENV")
        .env_remove("PYNEW_TEMPLATE_DIR")
        .env_remove("RUST_LOG")
        .args(["--base-dir", base_dir.to_str().unwrap()])
        .args(["--python", MISSING_PYTHON])
        .args(["--editor", MISSING_EDITOR]);
    cmd
}

#[test]
fn test_refuses_to_run_inside_virtual_env() {
    let temp_dir = TempDir::new().unwrap();
    let base_dir = temp_dir.path().join("projects");

    pynew(&base_dir)
        .env("VIRTUAL_ENV", temp_dir.path().join("active-venv"))
        .arg("demo")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("inside a virtual environment"));

    assert!(!base_dir.exists(), "nothing may be written when the guard trips");
}

#[test]
fn test_guard_runs_before_prompt() {
    let temp_dir = TempDir::new().unwrap();

    pynew(temp_dir.path())
        .env("VIRTUAL_ENV", "/somewhere/venv")
        .write_stdin("demo\n")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Enter new project name").not());
}

#[test]
fn test_empty_name_is_required() {
    let temp_dir = TempDir::new().unwrap();
    let base_dir = temp_dir.path().join("projects");

    pynew(&base_dir)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter new project name: "))
        .stdout(predicate::str::contains("Project name is required."))
        .stderr(predicate::str::contains(MISSING_EDITOR).not());

    assert!(!base_dir.exists());
}

#[test]
fn test_whitespace_name_is_required() {
    let temp_dir = TempDir::new().unwrap();
    let base_dir = temp_dir.path().join("projects");

    pynew(&base_dir)
        .write_stdin("   \t  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name is required."));

    assert!(!base_dir.exists());
}

#[test]
fn test_path_traversal_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let base_dir = temp_dir.path().join("projects");

    pynew(&base_dir)
        .arg("../escape")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot contain '/'"));

    assert!(!base_dir.exists());
    assert!(!temp_dir.path().join("escape").exists());
}

#[test]
fn test_existing_project_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("keep.txt"), "untouched").unwrap();

    pynew(temp_dir.path())
        .write_stdin("demo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project already exists."))
        .stderr(predicate::str::contains(format!("Could not find '{MISSING_EDITOR}'")));

    let entries: Vec<_> = fs::read_dir(&project).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(project.join("keep.txt")).unwrap(), "untouched");
}

#[test]
fn test_missing_python_is_fatal_and_leaves_directory() {
    let temp_dir = TempDir::new().unwrap();

    pynew(temp_dir.path())
        .args(["demo", "--no-editor"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Created project folder"))
        .stderr(predicate::str::contains(format!("Could not find '{MISSING_PYTHON}'")))
        .stderr(predicate::str::contains("Partially created project left at"));

    let project = temp_dir.path().join("demo");
    assert!(project.is_dir());
    assert!(!project.join("main.py").exists());
}

#[test]
fn test_base_dir_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let base_dir = temp_dir.path().join("from-env");

    let mut cmd = Command::cargo_bin("pynew").unwrap();
    cmd.env_remove("VIRTUAL_ENV")
        .env("PYNEW_BASE_DIR", &base_dir)
        .args(["--python", MISSING_PYTHON, "--no-editor", "demo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created project folder"));

    assert!(base_dir.join("demo").is_dir());
}

#[test]
fn test_help_lists_templates() {
    let mut cmd = Command::cargo_bin("pynew").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitignore.txt"))
        .stdout(predicate::str::contains("--base-dir"));
}
