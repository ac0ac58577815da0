//! Error types for unum
//!
//! Every failure is local to one invocation and fatal: no retries, no
//! rollback. Errors render as a single human-readable line naming the
//! path or resource involved, optionally followed by a remediation hint.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for unum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code reported for any failed invocation
pub const ERROR_EXIT_CODE: i32 = 1;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum Error {
    /// Persona config file does not exist (or could not be read)
    #[error("config not found: {}", path.display())]
    ConfigNotFound {
        persona: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persona config file exists but is not valid YAML / not the right shape
    #[error("invalid config {}: {}", path.display(), source)]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `init` refuses to clobber an existing config
    #[error("config already exists: {}", path.display())]
    ConfigAlreadyExists { path: PathBuf },

    /// Persona name is unusable as a file-name component
    #[error("invalid persona name {name:?}: {reason}")]
    InvalidPersonaName { name: String, reason: &'static str },

    /// The OS could not report the current working directory
    #[error("cannot determine working directory: {source}")]
    WorkingDirectoryUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// Session directory creation failed
    #[error("failed to create session directory {}: {}", path.display(), source)]
    SessionDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory agents map could not be serialized
    #[error("failed to encode agents: {source}")]
    AgentsEncoding {
        #[source]
        source: serde_json::Error,
    },

    /// The external tool is not on the search path
    #[error("{program} not found in PATH")]
    ExecutableNotFound { program: &'static str },

    /// Changing into the session directory failed
    #[error("failed to change directory to {}: {}", path.display(), source)]
    Chdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process replacement failed (exec returned)
    #[error("failed to exec {}: {}", program.display(), source)]
    ExecReplace {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure while writing the starter config
    #[error("failed to write {}: {}", path.display(), source)]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// User-facing hint for errors with a self-service remedy
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Error::ConfigNotFound { persona, .. } => Some(format!(
                "Run 'unum {} init' to create a starter config.",
                persona
            )),
            Error::ConfigInvalid { .. } => Some(
                "Fix the YAML syntax, or move the file aside and re-run init.".to_string(),
            ),
            Error::ExecutableNotFound { program } => Some(format!(
                "Install {} and make sure it is on your PATH.",
                program
            )),
            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let mut output = format!("\x1b[31mError\x1b[0m: {}\n", self);

        if let Some(hint) = self.suggestion() {
            output.push_str(&format!("\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(kind: std::io::ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, "test")
    }

    #[test]
    fn test_config_not_found_names_path() {
        let err = Error::ConfigNotFound {
            persona: "dev".to_string(),
            path: PathBuf::from("/home/u/.config/unum/dev.yaml"),
            source: io_err(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/home/u/.config/unum/dev.yaml"));
    }

    #[test]
    fn test_config_not_found_suggests_init() {
        let err = Error::ConfigNotFound {
            persona: "dev".to_string(),
            path: PathBuf::from("/tmp/dev.yaml"),
            source: io_err(std::io::ErrorKind::NotFound),
        };
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("unum dev init"));
    }

    #[test]
    fn test_config_invalid_carries_parse_detail() {
        let parse_err = serde_yaml::from_str::<crate::config::PersonaConfig>("prompt: [")
            .unwrap_err();
        let err = Error::ConfigInvalid {
            path: PathBuf::from("/tmp/dev.yaml"),
            source: parse_err,
        };
        // The underlying parse error must be retrievable
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_executable_not_found_display() {
        let err = Error::ExecutableNotFound { program: "claude" };
        assert_eq!(err.to_string(), "claude not found in PATH");
        assert!(err.suggestion().unwrap().contains("PATH"));
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::ConfigNotFound {
            persona: "dev".to_string(),
            path: PathBuf::from("/tmp/dev.yaml"),
            source: io_err(std::io::ErrorKind::NotFound),
        };
        let formatted = err.format_for_terminal();

        assert!(formatted.contains("\x1b[31m"));
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_chdir_has_no_suggestion() {
        let err = Error::Chdir {
            path: PathBuf::from("/nope"),
            source: io_err(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.suggestion().is_none());
        assert!(!err.format_for_terminal().contains("Hint"));
    }
}
