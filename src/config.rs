//! Persona configuration
//!
//! One YAML file per persona under the config root, edited by the user
//! out-of-band. Loaded fresh on every invocation; never written back,
//! except by the `init` flow which creates a starter file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::paths;

/// A persona definition as authored in `<config_root>/<persona>.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Informational persona name
    pub name: String,

    /// System prompt template; may contain `$WorkDir` / `{{.WorkDir}}`
    pub prompt: String,

    /// Default arguments appended on every launch, in file order
    pub args: Vec<String>,

    /// Sub-agent definitions forwarded to claude as one JSON blob
    pub agents: BTreeMap<String, Agent>,
}

/// A named sub-agent definition, passed through opaquely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub description: String,
    pub prompt: String,
}

impl PersonaConfig {
    /// Load the config for a persona, re-read from disk every call.
    ///
    /// A file that cannot be read is `ConfigNotFound`; a file that reads
    /// but does not parse is `ConfigInvalid`.
    pub fn load(persona: &str) -> Result<Self> {
        let path = paths::config_path(persona);
        debug!(path = %path.display(), "loading persona config");
        Self::load_path(&path, persona)
    }

    fn load_path(path: &Path, persona: &str) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
            persona: persona.to_string(),
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&data).map_err(|source| Error::ConfigInvalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create a starter config for a persona and print its path.
///
/// Refuses to touch an existing file.
pub fn init_persona(persona: &str) -> Result<()> {
    paths::validate_persona_name(persona)?;
    let path = paths::config_path(persona);
    init_at(&path, persona)?;
    println!("Created {}", path.display());
    Ok(())
}

fn init_at(path: &Path, persona: &str) -> Result<()> {
    if path.exists() {
        return Err(Error::ConfigAlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::ConfigWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, starter_template(persona)).map_err(|source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Starter YAML written by `unum <persona> init`
fn starter_template(persona: &str) -> String {
    format!(
        r#"name: {persona}
prompt: |
  # {persona}

  You are {persona}. Define your persona here.

  ## Working Directory

  Your working directory is {{{{.WorkDir}}}}.
  Before your first tool use, run: cd {{{{.WorkDir}}}}
args:
  - "--model"
  - "sonnet"
# agents:
#   worker:
#     description: "A helper agent"
#     prompt: "You are a helpful assistant"
"#
    )
}
