// src/aur/mod.rs
// =============================================================================
// This module downloads PKGBUILD files from the Arch User Repository (AUR).
//
// Currently implements:
// - Escaping a package name so it is safe inside a query string
// - Building the cgit "plain" URL for that package's PKGBUILD
// - Fetching the file and classifying the HTTP status
//
// The AUR serves the raw file at:
//   https://aur.archlinux.org/cgit/aur.git/plain/PKGBUILD?h=<package>
// =============================================================================

mod fetch;

pub use fetch::{fetch_pkgbuild, DEFAULT_AUR_URL};
