// src/completion.rs
// =============================================================================
// Shell completion scripts for `pkgview completion <shell>`.
//
// Each script is static text. When sourced, it fills a shell-local cache of
// AUR package names the first time completion is requested (by running
// `yay -Sl aur`) and registers a completion handler for pkgview's argument.
// We never parse these scripts, we only print them.
//
// Usage:
//   source <(pkgview completion bash)
//   pkgview completion zsh > ~/.zfunc/_pkgview
//   pkgview completion fish | source
// =============================================================================

use std::str::FromStr;

use crate::error::{PkgviewError, Result};

const BASH: &str = r##"
__bash_aur_pkg_cache=()

__bash_complete_aur_packages() {
  # If cache is empty, populate it with package names from yay.
  if [ ${#__bash_aur_pkg_cache[@]} -eq 0 ]; then
    mapfile -t __bash_aur_pkg_cache < <(yay -Sl aur | awk '{print $2}')
  fi
  # Print cached package names as completion options.
  printf '%s\n' "${__bash_aur_pkg_cache[@]}"
}

# Register the completion function for pkgview command.
complete -F __bash_complete_aur_packages pkgview
"##;

const ZSH: &str = r##"
typeset -ga __zsh_aur_pkg_cache

__zsh_complete_aur_packages() {
  # If cache array is empty, fill it with package names from yay.
  if (( ${#__zsh_aur_pkg_cache[@]} == 0 )); then
    __zsh_aur_pkg_cache=("${(@f)$(yay -Sl aur | awk '{print $2}')}")
  fi
  # Output cached package names for completion.
  printf '%s\n' "${__zsh_aur_pkg_cache[@]}"
}

# Use compctl to assign completion function to pkgview.
compctl -K __zsh_complete_aur_packages pkgview
"##;

const FISH: &str = r##"
function __fish_complete_aur_packages
  # Populate cache if not already set.
  if not set -q __fish_aur_pkg_cache
    set -g __fish_aur_pkg_cache (yay -Sl aur | awk '{print $2}')
  end
  # Print cached package names for completion.
  printf "%s\n" $__fish_aur_pkg_cache
end

# Setup fish completions for pkgview command.
complete -c pkgview -e
complete -c pkgview -f
complete -c pkgview -a "(__fish_complete_aur_packages)"
"##;

/// Shells we ship a completion script for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    /// The script body for this shell, printed verbatim
    pub fn script(self) -> &'static str {
        match self {
            Shell::Bash => BASH,
            Shell::Zsh => ZSH,
            Shell::Fish => FISH,
        }
    }
}

// Shell names are matched case-insensitively: "BASH", "Zsh" and "fish" all work
impl FromStr for Shell {
    type Err = PkgviewError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(PkgviewError::UnsupportedShell(name.to_string())),
        }
    }
}

// Looks up the completion script for the shell named on the command line.
//
// `None` means the user typed `pkgview completion` with nothing after it.
pub fn completion_script(shell: Option<&str>) -> Result<&'static str> {
    let name = shell.ok_or(PkgviewError::MissingShell)?;
    Ok(name.parse::<Shell>()?.script())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shell_gets_its_own_script() {
        assert_eq!(completion_script(Some("bash")).unwrap(), BASH);
        assert_eq!(completion_script(Some("zsh")).unwrap(), ZSH);
        assert_eq!(completion_script(Some("fish")).unwrap(), FISH);
    }

    #[test]
    fn test_shell_name_is_case_insensitive() {
        assert_eq!(completion_script(Some("BASH")).unwrap(), BASH);
        assert_eq!(completion_script(Some("Zsh")).unwrap(), ZSH);
        assert_eq!(completion_script(Some("fIsH")).unwrap(), FISH);
    }

    #[test]
    fn test_missing_shell_is_an_error() {
        let err = completion_script(None).unwrap_err();
        assert!(matches!(err, PkgviewError::MissingShell));
        assert!(err.to_string().contains("shell arg missing"));
    }

    #[test]
    fn test_unknown_shell_is_an_error() {
        let err = completion_script(Some("xyz")).unwrap_err();
        assert!(matches!(err, PkgviewError::UnsupportedShell(ref s) if s == "xyz"));
    }

    #[test]
    fn test_scripts_register_for_pkgview() {
        assert!(BASH.contains("complete -F __bash_complete_aur_packages pkgview"));
        assert!(ZSH.contains("compctl -K __zsh_complete_aur_packages pkgview"));
        assert!(FISH.contains("complete -c pkgview -a"));
    }

    #[test]
    fn test_scripts_keep_their_comments() {
        assert!(BASH.starts_with("\n__bash_aur_pkg_cache=()\n"));
        assert!(BASH.contains("  # If cache is empty, populate it with package names from yay.\n"));
        assert!(ZSH.contains("# Use compctl to assign completion function to pkgview.\n"));
        assert!(FISH.contains("  # Populate cache if not already set.\n"));
        assert!(FISH.ends_with("complete -c pkgview -a \"(__fish_complete_aur_packages)\"\n"));
    }
}
