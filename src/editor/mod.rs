// src/editor/mod.rs
// =============================================================================
// This module opens downloaded PKGBUILDs in the user's text editor.
//
// Submodules:
// - resolve: Picks the editor executable ($EDITOR first, then a fallback list)
// - launch: Writes the scratch file and runs the editor on it
// =============================================================================

mod launch;
mod resolve;

pub use launch::open_in_editor;
pub use resolve::resolve_editor;

#[cfg(test)]
pub(crate) use launch::open_with;
#[cfg(test)]
pub(crate) use resolve::resolve_with;
