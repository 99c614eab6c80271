// src/main.rs
// =============================================================================
// This is the entry point of pkgview.
//
// What happens here:
// 1. Set up logging (silent unless PKGVIEW_LOG is set)
// 2. Parse command-line arguments using clap
// 3. Dispatch: usage text, a completion script, or view a package
// 4. Print any error as "error: ..." and exit 1 (0 on success)
//
// Viewing a package is two steps: download the PKGBUILD from the AUR, then
// open it in an editor. Every failure along the way is final.
// =============================================================================

mod aur;
mod cli;
mod completion;
mod config;
mod editor;
mod error;
mod logging;

#[cfg(test)]
mod test_server;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use config::ViewConfig;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    // Handles --help and --version itself, and exits 2 on malformed arguments
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    let outcome = run(&cli, &mut stdout).await;
    report(outcome, &mut stdout)
}

// Turns the outcome of a run into the process exit code.
// Errors go to the same stream as normal output, prefixed with "error:".
fn report<W: Write>(outcome: Result<()>, out: &mut W) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Dispatches on the parsed command line, writing any text output to `out`
async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Some(command @ Commands::Completion { .. }) => {
            let script = completion::completion_script(command.shell())?;
            writeln!(out, "{}", script)?;
        }
        None => match cli.package() {
            Some(package) => {
                let client = reqwest::Client::new();
                view_package(&client, package, &ViewConfig::from_cli(cli)).await?
            }
            None => writeln!(out, "{}", Cli::command().render_help())?,
        },
    }

    Ok(())
}

// Fetches the PKGBUILD of `package` and opens it in the editor
async fn view_package(client: &reqwest::Client, package: &str, config: &ViewConfig) -> Result<()> {
    let pkgbuild = aur::fetch_pkgbuild(client, &config.aur_url, package).await?;
    editor::open_in_editor(&pkgbuild, config.cleanup).await?;
    Ok(())
}
