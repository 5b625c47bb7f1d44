//! Home-directory placeholder handling.

use std::path::{Path, PathBuf};

use super::error::PathError;

/// Token in a root template that stands for the user's home directory.
pub const HOME_PLACEHOLDER: &str = "~";

/// Substitute a leading home placeholder in `template`.
///
/// This is plain string substitution: no environment variables are read and
/// a `~` anywhere other than the first character is left untouched. Returns
/// `None` when the template needs a home directory but none is known.
pub fn expand_home(template: &str, home: Option<&Path>) -> Option<PathBuf> {
    match template.strip_prefix(HOME_PLACEHOLDER) {
        Some(rest) => {
            let home = home?;
            Some(PathBuf::from(format!("{}{rest}", home.display())))
        }
        None => Some(PathBuf::from(template)),
    }
}

/// Validate a user-supplied home directory override.
///
/// Expands a leading `~` against the real home directory so that
/// `--home ~/fixtures` works from a shell that did not expand it.
pub fn normalize_home_override(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with(HOME_PLACEHOLDER) {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        expand_home(trimmed, Some(&home)).ok_or(PathError::NoHomeDir)?
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Err(PathError::RelativeHome(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_leading_placeholder() {
        let home = Path::new("/home/player");
        let expanded = expand_home("~/.local/share/Steam/steamapps", Some(home)).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/player/.local/share/Steam/steamapps"));
    }

    #[test]
    fn test_absolute_template_passes_through() {
        let expanded = expand_home("/Applications/Battle.net/Games", None).unwrap();
        assert_eq!(expanded, PathBuf::from("/Applications/Battle.net/Games"));
    }

    #[test]
    fn test_inner_tilde_is_not_substituted() {
        let expanded = expand_home(r"C:\PROGRA~1\Steam", Some(Path::new("/home/x"))).unwrap();
        assert_eq!(expanded, PathBuf::from(r"C:\PROGRA~1\Steam"));
    }

    #[test]
    fn test_placeholder_without_home_is_skipped() {
        assert!(expand_home("~/Games", None).is_none());
    }

    #[test]
    fn test_override_rejects_empty_and_relative() {
        assert!(matches!(normalize_home_override("  "), Err(PathError::EmptyPath)));
        assert!(matches!(
            normalize_home_override("relative/dir"),
            Err(PathError::RelativeHome(_))
        ));
    }
}
