//! Launcher root resolution.
//!
//! Turns the static `PathTable` into at most one existing directory per
//! launcher. A launcher without a usable root is reported as
//! `NotApplicable`, never as an error: callers simply skip it.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::platform::expand_home;
use super::table::PathTable;
use crate::domain::{Launcher, OsKey};

/// Why a launcher has no root to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotApplicableReason {
    /// The table has no candidates for this launcher on this OS.
    NoCandidates,
    /// Candidates exist but none is an existing directory.
    NoneExist,
}

/// Outcome of resolving one launcher's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootResolution {
    Found(PathBuf),
    NotApplicable(NotApplicableReason),
}

impl RootResolution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotApplicable(_) => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotApplicable(_) => None,
        }
    }
}

/// Selects launcher roots for an operating system.
#[derive(Debug, Clone)]
pub struct PathResolver {
    table: PathTable,
    home: Option<PathBuf>,
}

impl PathResolver {
    /// Create a resolver over an explicit table and home directory.
    ///
    /// A `None` home makes every `~`-relative candidate unusable.
    pub fn new(table: PathTable, home: Option<PathBuf>) -> Self {
        Self { table, home }
    }

    /// Create a resolver using the current user's home directory.
    pub fn with_detected_home(table: PathTable) -> Self {
        let home = dirs::home_dir();
        if home.is_none() {
            debug!("Home directory unknown; home-relative launcher roots will be skipped");
        }
        Self::new(table, home)
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Resolve the root for `launcher` on `os`.
    ///
    /// Returns the first candidate, in table order, that exists as a
    /// directory after home expansion.
    pub fn resolve(&self, launcher: Launcher, os: OsKey) -> RootResolution {
        let candidates = self.table.candidates(launcher, os);
        if candidates.is_empty() {
            return RootResolution::NotApplicable(NotApplicableReason::NoCandidates);
        }

        for template in candidates {
            let Some(path) = expand_home(template, self.home.as_deref()) else {
                continue;
            };
            if path.is_dir() {
                debug!(%launcher, %os, path = %path.display(), "Resolved launcher root");
                return RootResolution::Found(path);
            }
        }

        debug!(%launcher, %os, "No launcher root exists");
        RootResolution::NotApplicable(NotApplicableReason::NoneExist)
    }

    /// Resolve every known launcher, in declared order.
    pub fn resolve_all(&self, os: OsKey) -> ResolvedRoots {
        ResolvedRoots {
            os,
            roots: Launcher::ALL
                .into_iter()
                .map(|launcher| (launcher, self.resolve(launcher, os)))
                .collect(),
        }
    }
}

/// Every launcher's resolution captured in one value.
///
/// Used for diagnostics (`rigscan paths`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoots {
    pub os: OsKey,
    pub roots: Vec<(Launcher, RootResolution)>,
}

impl fmt::Display for ResolvedRoots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "os = {}", self.os)?;
        for (launcher, resolution) in &self.roots {
            match resolution {
                RootResolution::Found(path) => write!(f, "\n{launcher} = {}", path.display())?,
                RootResolution::NotApplicable(NotApplicableReason::NoCandidates) => {
                    write!(f, "\n{launcher} = (not applicable: no known location)")?;
                }
                RootResolution::NotApplicable(NotApplicableReason::NoneExist) => {
                    write!(f, "\n{launcher} = (not applicable: not installed)")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::LauncherRootPath;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_candidates_is_not_applicable() {
        let resolver = PathResolver::new(PathTable::builtin(), None);
        assert_eq!(
            resolver.resolve(Launcher::Origin, OsKey::Win32),
            RootResolution::NotApplicable(NotApplicableReason::NoCandidates)
        );
        assert_eq!(
            resolver.resolve(Launcher::Epic, OsKey::Linux),
            RootResolution::NotApplicable(NotApplicableReason::NoCandidates)
        );
    }

    #[test]
    fn test_missing_directory_is_not_applicable() {
        let table = PathTable::from_entries([LauncherRootPath::new(
            Launcher::Steam,
            OsKey::Linux,
            "/definitely/not/a/real/rigscan/root",
        )]);
        let resolver = PathResolver::new(table, None);
        assert_eq!(
            resolver.resolve(Launcher::Steam, OsKey::Linux),
            RootResolution::NotApplicable(NotApplicableReason::NoneExist)
        );
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().to_path_buf();
        fs::create_dir_all(home.join("second")).unwrap();
        fs::create_dir_all(home.join("third")).unwrap();

        let table = PathTable::from_entries([
            LauncherRootPath::new(Launcher::Epic, OsKey::Linux, "~/first"),
            LauncherRootPath::new(Launcher::Epic, OsKey::Linux, "~/second"),
            LauncherRootPath::new(Launcher::Epic, OsKey::Linux, "~/third"),
        ]);
        let resolver = PathResolver::new(table, Some(home.clone()));

        let resolved = resolver.resolve(Launcher::Epic, OsKey::Linux);
        assert_eq!(resolved.path(), Some(home.join("second").as_path()));
    }

    #[test]
    fn test_home_relative_candidate_skipped_without_home() {
        let table = PathTable::from_entries([LauncherRootPath::new(
            Launcher::Steam,
            OsKey::Linux,
            "~/.local/share/Steam/steamapps",
        )]);
        let resolver = PathResolver::new(table, None);
        assert!(resolver.resolve(Launcher::Steam, OsKey::Linux).path().is_none());
    }

    #[test]
    fn test_regular_file_is_not_a_root() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().to_path_buf();
        fs::write(home.join("steamapps"), b"not a dir").unwrap();

        let table = PathTable::from_entries([LauncherRootPath::new(
            Launcher::Steam,
            OsKey::Linux,
            "~/steamapps",
        )]);
        let resolver = PathResolver::new(table, Some(home.clone()));
        assert!(resolver.resolve(Launcher::Steam, OsKey::Linux).path().is_none());
    }

    #[test]
    fn test_resolve_all_display_lists_every_launcher() {
        let resolver = PathResolver::new(PathTable::builtin(), None);
        let output = resolver.resolve_all(OsKey::Linux).to_string();

        assert!(output.starts_with("os = linux"));
        for launcher in Launcher::ALL {
            assert!(output.contains(&format!("{launcher} = ")), "{output}");
        }
    }
}
