//! Path resolution for persona configs and session directories
//!
//! All resolution is deterministic given the persona name, the working
//! directory, and an environment snapshot (`XDG_CONFIG_HOME`,
//! `XDG_CACHE_HOME`, `HOME`). The environment-reading entry points
//! delegate to pure internals so the mapping itself is unit-testable
//! without touching process state.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory name used under both the config and cache roots
const APP_DIR: &str = "unum";

/// Resolve the configuration root: `$XDG_CONFIG_HOME/unum` when set and
/// non-empty, else `$HOME/.config/unum`.
pub fn config_root() -> PathBuf {
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    config_root_from(xdg.as_deref(), dirs::home_dir().as_deref())
}

fn config_root_from(xdg_config: Option<&str>, home: Option<&Path>) -> PathBuf {
    root_from(xdg_config, home, ".config")
}

/// Resolve the cache root: `$XDG_CACHE_HOME/unum` when set and non-empty,
/// else `$HOME/.cache/unum`.
pub fn cache_root() -> PathBuf {
    let xdg = env::var("XDG_CACHE_HOME").ok();
    cache_root_from(xdg.as_deref(), dirs::home_dir().as_deref())
}

fn cache_root_from(xdg_cache: Option<&str>, home: Option<&Path>) -> PathBuf {
    root_from(xdg_cache, home, ".cache")
}

fn root_from(xdg: Option<&str>, home: Option<&Path>, fallback: &str) -> PathBuf {
    match xdg {
        Some(dir) if !dir.is_empty() => Path::new(dir).join(APP_DIR),
        _ => home
            .unwrap_or_else(|| Path::new(""))
            .join(fallback)
            .join(APP_DIR),
    }
}

/// Path of a persona's config file: `<config_root>/<persona>.yaml`
pub fn config_path(persona: &str) -> PathBuf {
    config_root().join(format!("{}.yaml", persona))
}

/// Session directory for a (persona, working directory) pair:
/// `<cache_root>/<persona>/<dasherized workdir>`
pub fn session_dir(persona: &str, work_dir: &Path) -> PathBuf {
    session_dir_in(&cache_root(), persona, work_dir)
}

fn session_dir_in(cache_root: &Path, persona: &str, work_dir: &Path) -> PathBuf {
    cache_root.join(persona).join(dasherize(work_dir))
}

/// Convert /home/dev/Projects/foo to home-dev-Projects-foo.
///
/// The encoding is intentionally lossy: `/a/b-c` and `/a/b/c` map to the
/// same component. Existing session directories created under this scheme
/// must keep resolving, so it is preserved as-is.
fn dasherize(work_dir: &Path) -> String {
    let s = work_dir.to_string_lossy();
    s.strip_prefix('/').unwrap_or(&s).replace('/', "-")
}

/// Check that a persona name is usable as a file-name component.
///
/// The name ends up verbatim inside filesystem paths, so anything that
/// could escape the config or cache root is rejected.
pub fn validate_persona_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("must not contain path separators")
    } else if name.contains('\0') {
        Some("must not contain NUL bytes")
    } else if name == "." || name == ".." {
        Some("must not be a relative path component")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidPersonaName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
