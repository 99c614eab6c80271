// src/error.rs
// =============================================================================
// Every way a pkgview invocation can fail.
//
// Each variant maps to one failure kind: a usage problem, a remote lookup
// that came back 404 or with some other bad status, a network failure, no
// editor to run, a scratch file we could not write, or an editor that would
// not start or exited badly.
//
// The binary's top level turns these into `anyhow::Error` with `?` and prints
// them with an "error:" prefix.
// =============================================================================

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkgviewError {
    /// `pkgview completion` was called without naming a shell
    #[error("completion: shell arg missing (bash/zsh/fish)")]
    MissingShell,

    /// `pkgview completion <shell>` named a shell we have no script for
    #[error("completion: unsupported shell '{0}' (bash/zsh/fish)")]
    UnsupportedShell(String),

    /// The AUR answered 404 for this (escaped) package name
    #[error("{0} package not found")]
    PackageNotFound(String),

    /// The AUR answered with any other non-200 status
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// DNS, connection or body read failure, passed through unchanged
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("no supported editor found in PATH; please set the EDITOR environment variable to your preferred editor")]
    NoEditor,

    /// Creating, writing or persisting the scratch file failed
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to start editor '{}': {source}", .editor.display())]
    EditorSpawn {
        editor: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("editor '{}' exited with {status}", .editor.display())]
    EditorExit { editor: PathBuf, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, PkgviewError>;
