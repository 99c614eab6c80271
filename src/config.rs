// src/config.rs
// =============================================================================
// Settings for one `pkgview <package>` run.
//
// Sources, highest priority first:
// 1. Command-line flags (--aur-url, --cleanup)
// 2. Environment (PKGVIEW_AUR_URL)
// 3. Built-in defaults (https://aur.archlinux.org, keep the scratch file)
//
// Nothing is read from or written to disk. $EDITOR is not part of this: it is
// looked up fresh when the editor is resolved.
// =============================================================================

use std::env;

use crate::aur::DEFAULT_AUR_URL;
use crate::cli::Cli;

/// Environment variable that overrides the AUR base URL
pub const AUR_URL_ENV: &str = "PKGVIEW_AUR_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Base URL PKGBUILDs are fetched from
    pub aur_url: String,
    /// Remove the scratch file after the editor exits
    pub cleanup: bool,
}

impl ViewConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, env::var(AUR_URL_ENV).ok())
    }

    fn resolve(cli: &Cli, env_aur_url: Option<String>) -> Self {
        let aur_url = cli
            .aur_url
            .clone()
            .or(env_aur_url.filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_AUR_URL.to_string());

        Self {
            aur_url,
            cleanup: cli.cleanup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pkgview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = ViewConfig::resolve(&cli(&["yay"]), None);
        assert_eq!(config.aur_url, DEFAULT_AUR_URL);
        assert!(!config.cleanup);
    }

    #[test]
    fn test_env_overrides_default() {
        let config = ViewConfig::resolve(&cli(&["yay"]), Some("http://mirror.local".into()));
        assert_eq!(config.aur_url, "http://mirror.local");
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = ViewConfig::resolve(
            &cli(&["--aur-url", "http://flag.local", "--cleanup", "yay"]),
            Some("http://env.local".into()),
        );
        assert_eq!(config.aur_url, "http://flag.local");
        assert!(config.cleanup);
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = ViewConfig::resolve(&cli(&["yay"]), Some(String::new()));
        assert_eq!(config.aur_url, DEFAULT_AUR_URL);
    }
}
