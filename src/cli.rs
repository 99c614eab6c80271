// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Shapes we accept:
//   pkgview                       -> print usage
//   pkgview -h | --help           -> print usage
//   pkgview completion <shell>    -> print a completion script (alias: completions)
//   pkgview [FLAGS] <package>     -> fetch the PKGBUILD and open it in an editor
//
// Only the first argument decides what happens. Anything after the package
// name or the shell is accepted and ignored, "-h" included.
//
// The package name and the subcommand are mutually exclusive, so a package
// literally named "completion" cannot be viewed.
// =============================================================================

use clap::{Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  pkgview yay
  pkgview --help
  pkgview completion bash";

// This struct represents the whole command line
//
// Both the subcommand and the package are optional: with neither, main.rs
// prints the help text itself instead of letting clap report an error.
#[derive(Parser, Debug)]
#[command(
    name = "pkgview",
    version,
    about = "View the PKGBUILD of an AUR package in your editor",
    long_about = "pkgview downloads the PKGBUILD of an AUR package into a temporary file \
                  and opens it in $EDITOR (or the first of vi, nano, vim, nvim, jed found on PATH).",
    after_help = EXAMPLES,
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Name of the AUR package to view its PKGBUILD file
    ///
    /// Anything after the package name is ignored
    #[arg(value_name = "PACKAGE_NAME", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Fetch PKGBUILDs from this base URL instead of https://aur.archlinux.org
    ///
    /// Can also be set with the PKGVIEW_AUR_URL environment variable
    #[arg(long, value_name = "URL")]
    pub aur_url: Option<String>,

    /// Delete the temporary PKGBUILD file after the editor exits
    #[arg(long)]
    pub cleanup: bool,
}

impl Cli {
    /// The package to view: the first positional word, if any
    pub fn package(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Output shell completion script for one of: bash, zsh, fish
    ///
    /// Example: source <(pkgview completion bash)
    #[command(visible_alias = "completions")]
    Completion {
        /// Shell to print the script for (case-insensitive)
        ///
        /// Anything after the shell name is ignored
        #[arg(value_name = "SHELL", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Commands {
    /// Shell named after `completion`; None when it was left out
    pub fn shell(&self) -> Option<&str> {
        match self {
            Commands::Completion { args } => args.first().map(String::as_str),
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a Vec<String> instead of Option<String>?
//    - Only the first word matters, like `pkgview yay` or `completion bash`
//    - trailing_var_arg makes everything after that first word a plain
//      value, so `pkgview yay extra` and `pkgview yay -h` still view yay
//    - In first position, -h/--help and the real flags are still flags
//
// 2. Why is an empty shell list allowed?
//    - If clap required it, `pkgview completion` would fail with clap's
//      generic "missing argument" text
//    - Leaving it empty lets completion.rs produce the exact message
//
// 3. What does args_conflicts_with_subcommands do?
//    - Once a package name is seen, a later "completion" is not taken as
//      the subcommand; `pkgview yay completion bash` just views yay
// -----------------------------------------------------------------------------
