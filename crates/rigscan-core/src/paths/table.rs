//! Launcher install-root candidates.

use std::collections::HashMap;

use crate::domain::{Launcher, OsKey};

/// One candidate install root for a launcher on one operating system.
///
/// `template` may begin with the home placeholder (`~`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherRootPath {
    pub launcher: Launcher,
    pub os: OsKey,
    pub template: String,
}

impl LauncherRootPath {
    pub fn new(launcher: Launcher, os: OsKey, template: impl Into<String>) -> Self {
        Self {
            launcher,
            os,
            template: template.into(),
        }
    }
}

/// Immutable table of root candidates, injected into `PathResolver`.
///
/// Candidates keep their declaration order; the resolver picks the first one
/// that exists on disk.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    entries: HashMap<(Launcher, OsKey), Vec<String>>,
}

impl PathTable {
    /// Build a table from an explicit list of candidates.
    pub fn from_entries(entries: impl IntoIterator<Item = LauncherRootPath>) -> Self {
        let mut table: HashMap<(Launcher, OsKey), Vec<String>> = HashMap::new();
        for entry in entries {
            table
                .entry((entry.launcher, entry.os))
                .or_default()
                .push(entry.template);
        }
        Self { entries: table }
    }

    /// The default locations used by each launcher's installer.
    ///
    /// Steam roots point at `steamapps`; games live one level further down in
    /// `common`. Origin has no entries: it has no record [`Platform`] and is
    /// only ever detected by protocol probe, so it never resolves.
    ///
    /// [`Platform`]: crate::domain::Platform
    pub fn builtin() -> Self {
        use Launcher::{BattleNet, Epic, Steam};
        use OsKey::{Darwin, Linux, Win32};

        Self::from_entries([
            LauncherRootPath::new(Steam, Win32, r"C:\Program Files (x86)\Steam\steamapps"),
            LauncherRootPath::new(Steam, Win32, r"C:\Program Files\Steam\steamapps"),
            LauncherRootPath::new(Steam, Win32, r"D:\Steam\steamapps"),
            LauncherRootPath::new(Steam, Win32, r"E:\Steam\steamapps"),
            LauncherRootPath::new(Steam, Darwin, "~/Library/Application Support/Steam/steamapps"),
            LauncherRootPath::new(Steam, Linux, "~/.local/share/Steam/steamapps"),
            LauncherRootPath::new(Epic, Win32, r"C:\Program Files\Epic Games"),
            LauncherRootPath::new(Epic, Win32, r"C:\Program Files (x86)\Epic Games"),
            LauncherRootPath::new(Epic, Win32, r"D:\Epic Games"),
            LauncherRootPath::new(Epic, Win32, r"E:\Epic Games"),
            LauncherRootPath::new(
                Epic,
                Darwin,
                "~/Library/Application Support/Epic/EpicGamesLauncher/Data/Installed Games",
            ),
            LauncherRootPath::new(BattleNet, Win32, r"C:\Program Files (x86)\Battle.net\Games"),
            LauncherRootPath::new(BattleNet, Win32, r"C:\Program Files\Battle.net\Games"),
            LauncherRootPath::new(BattleNet, Win32, r"D:\Battle.net\Games"),
            LauncherRootPath::new(BattleNet, Win32, r"E:\Battle.net\Games"),
            LauncherRootPath::new(BattleNet, Darwin, "/Applications/Battle.net/Games"),
        ])
    }

    /// Candidates for a launcher on an OS, in declaration order.
    pub fn candidates(&self, launcher: Launcher, os: OsKey) -> &[String] {
        self.entries
            .get(&(launcher, os))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_steam_everywhere() {
        let table = PathTable::builtin();
        for os in [OsKey::Win32, OsKey::Darwin, OsKey::Linux] {
            assert!(!table.candidates(Launcher::Steam, os).is_empty(), "{os}");
        }
    }

    #[test]
    fn test_builtin_preserves_declaration_order() {
        let table = PathTable::builtin();
        let epic = table.candidates(Launcher::Epic, OsKey::Win32);
        assert_eq!(epic.len(), 4);
        assert_eq!(epic[0], r"C:\Program Files\Epic Games");
        assert_eq!(epic[3], r"E:\Epic Games");
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let table = PathTable::builtin();
        assert!(table.candidates(Launcher::Origin, OsKey::Win32).is_empty());
        assert!(table.candidates(Launcher::Epic, OsKey::Linux).is_empty());
        assert!(PathTable::default().candidates(Launcher::Steam, OsKey::Linux).is_empty());
    }
}
