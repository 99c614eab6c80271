// src/editor/launch.rs
// =============================================================================
// Writes the PKGBUILD to a scratch file and opens it in the editor.
//
// How it works:
// 1. Create a fresh temp file named pkgbuild-XXXXXX in the system temp dir
// 2. Write the whole PKGBUILD and close the file so the editor sees all of it
// 3. Resolve the editor (if that fails, nothing is launched)
// 4. Run the editor on the file with our stdin/stdout/stderr and wait for it
//
// The scratch file stays on disk afterwards unless --cleanup was given.
// =============================================================================

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::editor::resolve_editor;
use crate::error::{PkgviewError, Result};

const SCRATCH_PREFIX: &str = "pkgbuild-";

/// Writes `content` to a new scratch file and opens it in the resolved editor.
///
/// With `cleanup` the scratch file is removed once the editor has run;
/// otherwise it is left in the temp dir.
pub async fn open_in_editor(content: &[u8], cleanup: bool) -> Result<()> {
    open_with(content, cleanup, resolve_editor).await?;
    Ok(())
}

// Same as open_in_editor, with the editor resolution passed in.
// Returns the scratch file path (which may already be gone if `cleanup`).
pub(crate) async fn open_with<R>(content: &[u8], cleanup: bool, resolve: R) -> Result<PathBuf>
where
    R: FnOnce() -> Result<PathBuf>,
{
    let scratch = write_scratch(content)?;
    debug!(path = %scratch.display(), "wrote scratch file");

    let outcome = match resolve() {
        Ok(editor) => run_editor(&editor, &scratch).await,
        Err(e) => Err(e),
    };

    if cleanup {
        if let Err(e) = std::fs::remove_file(&scratch) {
            warn!(path = %scratch.display(), error = %e, "could not remove scratch file");
        }
    }

    outcome.map(|()| scratch)
}

// Creates the scratch file and writes `content` into it.
// The handle is closed before returning and the file is kept on disk.
fn write_scratch(content: &[u8]) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempfile()?;

    file.write_all(content)?;
    file.flush()?;

    let path = file
        .into_temp_path()
        .keep()
        .map_err(std::io::Error::from)?;

    Ok(path)
}

// Runs `editor <file>` in the foreground and waits for it to exit
async fn run_editor(editor: &Path, file: &Path) -> Result<()> {
    let status = Command::new(editor)
        .arg(file)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| PkgviewError::EditorSpawn {
            editor: editor.to_path_buf(),
            source,
        })?;

    debug!(%status, "editor exited");

    if !status.success() {
        return Err(PkgviewError::EditorExit {
            editor: editor.to_path_buf(),
            status,
        });
    }

    Ok(())
}
