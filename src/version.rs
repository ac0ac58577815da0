//! Version and build information
//!
//! Provides access to build-time embedded information.

use std::fmt;

/// Build information embedded at compile time
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Package version from Cargo.toml
    pub version: &'static str,
    /// Package name
    pub name: &'static str,
    /// Git commit hash (short)
    pub git_hash: &'static str,
    /// Build timestamp
    pub build_timestamp: &'static str,
    /// Target triple (e.g., x86_64-unknown-linux-gnu)
    pub target: &'static str,
    /// Build profile (debug/release)
    pub profile: &'static str,
    /// Rustc version used to build
    pub rustc_version: &'static str,
}

impl BuildInfo {
    /// Get the current build information
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            name: env!("CARGO_PKG_NAME"),
            git_hash: env!("UNUM_GIT_HASH"),
            build_timestamp: env!("UNUM_BUILD_TIMESTAMP"),
            target: env!("UNUM_TARGET"),
            profile: env!("UNUM_PROFILE"),
            rustc_version: env!("UNUM_RUSTC_VERSION"),
        }
    }

    /// Get the full version string (e.g., "0.1.0-abc1234")
    pub fn full_version(&self) -> String {
        format!("{}-{}", self.version, self.git_hash)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.full_version())?;
        writeln!(f, "  Built:   {}", self.build_timestamp)?;
        writeln!(f, "  Target:  {}", self.target)?;
        writeln!(f, "  Profile: {}", self.profile)?;
        writeln!(f, "  Rustc:   {}", self.rustc_version)?;
        Ok(())
    }
}

/// Print version information to stdout
pub fn print_version() {
    print!("{}", BuildInfo::current());
}
