//! CLI argument parsing using clap v4
//!
//! The surface is deliberately flat: one positional persona, then an
//! opaque tail forwarded to claude verbatim. clap's automatic help and
//! version are disabled because usage must go to stderr with a non-zero
//! exit, and every hyphenated token after the persona belongs to claude.

use clap::Parser;

/// unum - persona launcher for Claude Code
#[derive(Parser, Debug)]
#[command(name = "unum")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Persona to launch (or `-h`/`--help`/`help`, `-V`/`--version`)
    #[arg(allow_hyphen_values = true)]
    pub persona: String,

    /// `init`, or flags passed through to claude verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Usage text, printed to stderr
pub fn usage() -> &'static str {
    r#"unum - persona launcher for Claude Code

Usage:
  unum <persona> [flags...]   Launch claude with the specified persona
  unum <persona> init         Create a template config for the persona

Flags are passed through to claude (e.g., --continue, --resume, -p "prompt")

Config files are stored in ~/.config/unum/<persona>.yaml
"#
}
