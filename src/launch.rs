//! Launching claude with a persona context
//!
//! The pipeline is strictly sequential: load config, resolve the session
//! directory, expand the prompt, assemble arguments, then replace this
//! process with claude. Directory creation and the final exec are the only
//! side effects; every failure is fatal and surfaced to the user.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::PersonaConfig;
use crate::error::{Error, Result};
use crate::paths;
use crate::template;

/// Name of the external tool the process is handed over to
const CLAUDE_BIN: &str = "claude";

/// Build the claude argument vector.
///
/// Order is fixed: system prompt, add-dir, agents (when present), persona
/// args, then caller pass-through args. Arguments are opaque strings — no
/// deduplication, no flag validation.
pub fn build_args(
    config: &PersonaConfig,
    expanded_prompt: &str,
    work_dir: &Path,
    extra_args: &[String],
) -> Result<Vec<String>> {
    let mut args = vec![
        "--system-prompt".to_string(),
        expanded_prompt.to_string(),
        "--add-dir".to_string(),
        work_dir.to_string_lossy().into_owned(),
    ];

    if !config.agents.is_empty() {
        let blob =
            serde_json::to_string(&config.agents).map_err(|source| Error::AgentsEncoding { source })?;
        args.push("--agents".to_string());
        args.push(blob);
    }

    args.extend(config.args.iter().cloned());
    args.extend(extra_args.iter().cloned());

    Ok(args)
}

/// Launch claude for a persona. On success this never returns: the current
/// process image is replaced.
pub fn launch(persona: &str, extra_args: &[String]) -> Result<()> {
    paths::validate_persona_name(persona)?;
    let config = PersonaConfig::load(persona)?;

    let work_dir =
        env::current_dir().map_err(|source| Error::WorkingDirectoryUnavailable { source })?;

    // Persistent session directory (enables --continue and --resume).
    // Creation is idempotent: an existing directory is not an error.
    let session_dir = paths::session_dir(persona, &work_dir);
    fs::create_dir_all(&session_dir).map_err(|source| Error::SessionDirCreate {
        path: session_dir.clone(),
        source,
    })?;
    debug!(session_dir = %session_dir.display(), "session directory ready");

    let prompt = template::expand(&config.prompt, &work_dir.to_string_lossy());
    let args = build_args(&config, &prompt, &work_dir, extra_args)?;
    debug!(argc = args.len(), "assembled claude arguments");

    let claude = which::which(CLAUDE_BIN)
        .map_err(|_| Error::ExecutableNotFound { program: CLAUDE_BIN })?;
    debug!(path = %claude.display(), "found claude");

    env::set_current_dir(&session_dir).map_err(|source| Error::Chdir {
        path: session_dir.clone(),
        source,
    })?;

    exec_replace(&claude, &args)
}

/// Replace the current process image with claude, passing the inherited
/// environment through untouched.
#[cfg(unix)]
fn exec_replace(program: &Path, args: &[String]) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // exec() only returns on error
    let source = std::process::Command::new(program)
        .arg0(CLAUDE_BIN)
        .args(args)
        .exec();
    Err(Error::ExecReplace {
        program: program.to_path_buf(),
        source,
    })
}

/// Platforms without exec: run claude as a child and adopt its exit code,
/// which is indistinguishable from a hand-off for the caller.
#[cfg(not(unix))]
fn exec_replace(program: &Path, args: &[String]) -> Result<()> {
    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .map_err(|source| Error::ExecReplace {
            program: program.to_path_buf(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
