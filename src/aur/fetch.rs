// src/aur/fetch.rs
// =============================================================================
// Fetches a package's PKGBUILD from the AUR.
//
// Strategy:
// - Escape the package name as a query component (spaces become '+')
// - Substitute it into the cgit plain-file URL
// - Send one GET with the client's default settings: no retry, no auth
// - 404 means the package does not exist, any other non-200 is an HTTP error
//
// The response owns its connection. Returning early on a bad status drops it,
// so the body is released on every path, not just after a successful read.
// =============================================================================

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::form_urlencoded;

use crate::error::{PkgviewError, Result};

/// Where PKGBUILDs are fetched from unless `--aur-url` says otherwise
pub const DEFAULT_AUR_URL: &str = "https://aur.archlinux.org";

// Builds the PKGBUILD URL for a package
//
// Parameters:
//   base_url: AUR host, e.g. "https://aur.archlinux.org" (trailing '/' allowed)
//   package:  package name exactly as the user typed it
//
// Example:
//   ("https://aur.archlinux.org", "yay")
//     -> "https://aur.archlinux.org/cgit/aur.git/plain/PKGBUILD?h=yay"
pub fn pkgbuild_url(base_url: &str, package: &str) -> String {
    format!(
        "{}/cgit/aur.git/plain/PKGBUILD?h={}",
        base_url.trim_end_matches('/'),
        escape_package_name(package)
    )
}

fn escape_package_name(package: &str) -> String {
    form_urlencoded::byte_serialize(package.as_bytes()).collect()
}

// Downloads the PKGBUILD for `package` and returns its raw bytes
//
// Parameters:
//   client:   reqwest HTTP client (borrowed, built once in main.rs)
//   base_url: AUR host
//   package:  package name as typed
//
// Returns:
//   Ok(bytes)                  on HTTP 200
//   Err(PackageNotFound(name)) on HTTP 404, with the escaped name
//   Err(HttpStatus(code))      on any other status
//   Err(Transport(e))          when the request itself fails
pub async fn fetch_pkgbuild(client: &Client, base_url: &str, package: &str) -> Result<Vec<u8>> {
    let url = pkgbuild_url(base_url, package);
    debug!(%url, "fetching PKGBUILD");

    let response = client.get(&url).send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), "AUR responded");

    if status == StatusCode::NOT_FOUND {
        return Err(PkgviewError::PackageNotFound(escape_package_name(package)));
    }

    if status != StatusCode::OK {
        return Err(PkgviewError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    debug!(bytes = body.len(), "PKGBUILD downloaded");

    Ok(body.to_vec())
}
