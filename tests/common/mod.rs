//! Common test utilities
//!
//! Every test gets its own XDG config/cache roots so nothing leaks into
//! (or out of) the developer's real ~/.config/unum.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestEnv {
    pub config_home: TempDir,
    pub cache_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_home: TempDir::new().unwrap(),
            cache_home: TempDir::new().unwrap(),
        }
    }

    /// Command for the unum binary with isolated XDG roots
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("unum").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("XDG_CACHE_HOME", self.cache_home.path());
        cmd
    }

    /// Where a persona's config file resolves under this env
    pub fn config_path(&self, persona: &str) -> PathBuf {
        self.config_home
            .path()
            .join("unum")
            .join(format!("{}.yaml", persona))
    }

    /// Author a persona config the way a user would
    pub fn write_config(&self, persona: &str, body: &str) -> PathBuf {
        let path = self.config_path(persona);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }
}
