// src/editor/resolve.rs
// =============================================================================
// Decides which editor to run.
//
// Order:
// 1. $EDITOR, if it names something we can find (a name on PATH or a path)
// 2. The first of vi, nano, vim, nvim, jed found on PATH
// 3. Otherwise an error telling the user to set $EDITOR
//
// Nothing is cached: every call looks again.
//
// Rust concepts:
// - Generic closures: The PATH lookup is passed in, so tests can fake it
// - OsString: Environment values are not guaranteed to be UTF-8
// =============================================================================

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{PkgviewError, Result};

/// Editors tried, in order, when $EDITOR is unset or unusable
pub const FALLBACK_EDITORS: [&str; 5] = ["vi", "nano", "vim", "nvim", "jed"];

/// Resolves the editor from the real environment and PATH
pub fn resolve_editor() -> Result<PathBuf> {
    let editor = resolve_with(env::var_os("EDITOR"), |name| which::which(name).ok())?;
    debug!(editor = %editor.display(), "resolved editor");
    Ok(editor)
}

// Resolves the editor given the $EDITOR value and a way to locate executables
//
// Parameters:
//   preferred: value of $EDITOR, if set
//   locate:    returns the full path of an executable, or None if not found
//
// A usable $EDITOR is returned as written (so "nvim" stays "nvim"), while a
// fallback is returned as the path `locate` found.
pub(crate) fn resolve_with<F>(preferred: Option<OsString>, locate: F) -> Result<PathBuf>
where
    F: Fn(&OsStr) -> Option<PathBuf>,
{
    if let Some(editor) = preferred.filter(|e| !e.is_empty()) {
        if locate(&editor).is_some() {
            return Ok(PathBuf::from(editor));
        }
        debug!(editor = ?editor, "$EDITOR not found, trying fallbacks");
    }

    FALLBACK_EDITORS
        .iter()
        .find_map(|name| locate(OsStr::new(name)))
        .ok_or(PkgviewError::NoEditor)
}
