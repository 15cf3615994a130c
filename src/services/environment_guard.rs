use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::error::{Result, SetupError};

/// Marker file Python looks for next to (or one level above) its executable
const VENV_MARKER: &str = "pyvenv.cfg";

/// Installation prefixes of the Python runtime on PATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePrefixes {
    pub prefix: PathBuf,
    pub base_prefix: PathBuf,
}

impl RuntimePrefixes {
    /// Work out `sys.prefix` / `sys.base_prefix` for `executable` the way the
    /// interpreter does at startup, without running it.
    pub fn for_interpreter(executable: &Path) -> Self {
        let Some(bin_dir) = executable.parent() else {
            return Self {
                prefix: executable.to_path_buf(),
                base_prefix: executable.to_path_buf(),
            };
        };

        for dir in [Some(bin_dir), bin_dir.parent()].into_iter().flatten() {
            if let Ok(content) = fs::read_to_string(dir.join(VENV_MARKER)) {
                let base_prefix = parse_home(&content)
                    .map(|home| home.parent().map_or_else(|| home.clone(), Path::to_path_buf))
                    .unwrap_or_default();
                return Self {
                    prefix: dir.to_path_buf(),
                    base_prefix,
                };
            }
        }

        let prefix = bin_dir.parent().unwrap_or(bin_dir).to_path_buf();
        Self {
            base_prefix: prefix.clone(),
            prefix,
        }
    }

    /// True when the runtime belongs to a virtual environment
    pub fn is_isolated(&self) -> bool {
        self.prefix != self.base_prefix
    }
}

/// `home = /usr/bin` from a pyvenv.cfg
fn parse_home(content: &str) -> Option<PathBuf> {
    content.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        (key.trim() == "home" && !value.trim().is_empty()).then(|| PathBuf::from(value.trim()))
    })
}

/// Refuses to scaffold from inside an activated virtual environment
pub struct EnvironmentGuard<'a> {
    python_command: &'a str,
    search_path: Option<OsString>,
}

impl<'a> EnvironmentGuard<'a> {
    pub const fn new(python_command: &'a str) -> Self {
        Self { python_command, search_path: None }
    }

    /// Look the interpreter up in `path` instead of `PATH`
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    fn locate(&self) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(path) => which::which_in(self.python_command, Some(path), std::env::current_dir().ok()?),
            None => which::which(self.python_command),
        };
        match found {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(command = self.python_command, error = %e, "interpreter not found");
                None
            }
        }
    }

    /// Prefixes of the interpreter, or `None` when it isn't installed
    pub fn runtime_prefixes(&self) -> Option<RuntimePrefixes> {
        let executable = self.locate()?;
        let prefixes = RuntimePrefixes::for_interpreter(&executable);
        tracing::debug!(executable = %executable.display(), ?prefixes, "runtime prefixes");
        Some(prefixes)
    }

    /// Fail with `NestedEnvironment` when running inside an activated environment.
    ///
    /// `virtual_env` is the value of `VIRTUAL_ENV`, which `activate` exports.
    pub fn check(&self, virtual_env: Option<&str>) -> Result<()> {
        let prefixes = self.runtime_prefixes();

        if let Some(prefixes) = &prefixes {
            if prefixes.is_isolated() {
                return Err(SetupError::NestedEnvironment {
                    prefix: prefixes.prefix.display().to_string(),
                    base_prefix: prefixes.base_prefix.display().to_string(),
                });
            }
        }

        if let Some(active) = virtual_env.map(str::trim).filter(|v| !v.is_empty()) {
            return Err(SetupError::NestedEnvironment {
                prefix: active.to_string(),
                base_prefix: prefixes.map_or_else(
                    || "unknown".to_string(),
                    |p| p.base_prefix.display().to_string(),
                ),
            });
        }

        Ok(())
    }
}
