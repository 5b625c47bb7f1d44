//! Launcher library scanning.
//!
//! Membership rules per launcher:
//!
//! - Steam: a directory under `<root>/common` counts only if it directly
//!   contains a native executable for the OS
//! - Epic, Battle.net: every directory under the root counts
//! - Origin: nothing is scanned

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use rigscan_core::{
    DetectionError, GameRecord, Launcher, OsKey, PathResolver, Platform, RootResolution,
};
use tracing::{debug, warn};

/// Launchers whose libraries can be enumerated on disk, in scan order.
pub const SCANNABLE_LAUNCHERS: [Launcher; 3] = [Launcher::Steam, Launcher::Epic, Launcher::BattleNet];

#[derive(Debug, Clone, Copy)]
enum Membership {
    AnyDirectory,
    ContainsExecutable(&'static [&'static str]),
}

/// Scans launcher roots for installed games.
#[derive(Debug, Clone, Copy)]
pub struct LibraryScanner {
    os: OsKey,
}

impl LibraryScanner {
    pub const fn new(os: OsKey) -> Self {
        Self { os }
    }

    pub const fn os(&self) -> OsKey {
        self.os
    }

    /// Lazily enumerate the games under `root`.
    ///
    /// An unlistable root gives an empty scan. Entries that fail to read are
    /// logged and skipped; their siblings are still visited.
    pub fn scan(&self, root: &Path, launcher: Launcher) -> LibraryScan {
        let (Some(platform), Some(membership)) = (launcher.platform(), self.membership(launcher))
        else {
            return LibraryScan::empty();
        };

        let dir = match launcher {
            Launcher::Steam => root.join("common"),
            _ => root.to_path_buf(),
        };

        match fs::read_dir(&dir) {
            Ok(entries) => LibraryScan {
                entries: Some(entries),
                dir,
                membership,
                platform,
            },
            Err(e) => {
                warn!(
                    "{}",
                    DetectionError::ScanIo {
                        path: dir,
                        reason: e.to_string(),
                    }
                );
                LibraryScan::empty()
            }
        }
    }

    /// Resolve and scan every scannable launcher, concatenating the results.
    pub fn scan_installed(&self, resolver: &PathResolver) -> Vec<GameRecord> {
        let mut games = Vec::new();
        for launcher in SCANNABLE_LAUNCHERS {
            match resolver.resolve(launcher, self.os) {
                RootResolution::Found(root) => {
                    let before = games.len();
                    games.extend(self.scan(&root, launcher));
                    debug!(%launcher, root = %root.display(), count = games.len() - before, "Scanned library");
                }
                RootResolution::NotApplicable(reason) => {
                    debug!(?reason, "{}", DetectionError::PathNotApplicable(launcher));
                }
            }
        }
        games
    }

    const fn membership(&self, launcher: Launcher) -> Option<Membership> {
        match launcher {
            Launcher::Steam => Some(Membership::ContainsExecutable(
                self.os.executable_suffixes(),
            )),
            Launcher::Epic | Launcher::BattleNet => Some(Membership::AnyDirectory),
            Launcher::Origin => None,
        }
    }
}

/// Single-pass iterator over the games found in one launcher root.
///
/// Reads directory entries as it is advanced and cannot be restarted.
#[derive(Debug)]
pub struct LibraryScan {
    entries: Option<ReadDir>,
    dir: PathBuf,
    membership: Membership,
    platform: Platform,
}

impl LibraryScan {
    fn empty() -> Self {
        Self {
            entries: None,
            dir: PathBuf::new(),
            membership: Membership::AnyDirectory,
            platform: Platform::Custom,
        }
    }

    fn record_for(&self, path: PathBuf) -> Option<GameRecord> {
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return None,
            Err(e) => {
                skip(&path, &e);
                return None;
            }
        }

        if let Membership::ContainsExecutable(suffixes) = self.membership {
            match contains_executable(&path, suffixes) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    skip(&path, &e);
                    return None;
                }
            }
        }

        let name = path.file_name()?.to_string_lossy().into_owned();
        let record = GameRecord::new(name, self.platform);
        if record.is_none() {
            debug!(path = %path.display(), "Directory name has no identifier characters; skipped");
        }
        record.map(|r| r.with_install_path(path))
    }
}

impl Iterator for LibraryScan {
    type Item = GameRecord;

    fn next(&mut self) -> Option<GameRecord> {
        loop {
            let entry = match self.entries.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    skip(&self.dir, &e);
                    continue;
                }
            };
            if let Some(record) = self.record_for(entry.path()) {
                return Some(record);
            }
        }
    }
}

fn contains_executable(dir: &Path, suffixes: &[&str]) -> std::io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let name = name.to_string_lossy().to_ascii_lowercase();
        if suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn skip(path: &Path, error: &std::io::Error) {
    warn!(
        "{}",
        DetectionError::ScanIo {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_suffix_match_ignores_case() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("GAME.EXE"));
        assert!(contains_executable(temp.path(), &[".exe"]).unwrap());
        assert!(!contains_executable(temp.path(), &[".app"]).unwrap());
    }

    #[test]
    fn test_origin_scans_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Apex")).unwrap();
        let scanner = LibraryScanner::new(OsKey::Win32);
        assert_eq!(scanner.scan(temp.path(), Launcher::Origin).count(), 0);
    }

    #[test]
    fn test_nameless_directory_is_dropped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("!!!")).unwrap();
        fs::create_dir(temp.path().join("Fortnite")).unwrap();

        let games: Vec<_> = LibraryScanner::new(OsKey::Win32)
            .scan(temp.path(), Launcher::Epic)
            .collect();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id(), "fortnite");
    }
}
