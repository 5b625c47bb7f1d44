//! Launchers, host operating systems and launcher presence.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Platform;

/// A third-party game-distribution client recognised by rigscan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    Steam,
    Epic,
    #[serde(rename = "battlenet")]
    BattleNet,
    Origin,
}

impl Launcher {
    /// All launchers in the order detection passes visit them.
    pub const ALL: [Self; 4] = [Self::Steam, Self::Epic, Self::BattleNet, Self::Origin];

    /// URL scheme registered by the launcher's protocol handler.
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Steam => "steam://",
            Self::Epic => "com.epicgames.launcher://",
            Self::BattleNet => "battlenet://",
            Self::Origin => "origin://",
        }
    }

    /// Platform attributed to records found for this launcher.
    ///
    /// Origin has no record platform; it is only ever probed.
    pub const fn platform(self) -> Option<Platform> {
        match self {
            Self::Steam => Some(Platform::Steam),
            Self::Epic => Some(Platform::Epic),
            Self::BattleNet => Some(Platform::BattleNet),
            Self::Origin => None,
        }
    }
}

impl fmt::Display for Launcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Steam => "steam",
            Self::Epic => "epic",
            Self::BattleNet => "battlenet",
            Self::Origin => "origin",
        };
        f.write_str(label)
    }
}

/// Host operating-system key used to select launcher roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKey {
    Win32,
    Darwin,
    Linux,
}

impl OsKey {
    /// The key for the platform this binary was compiled for.
    ///
    /// Every non-Windows, non-macOS target is treated as Linux.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Win32
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }

    /// File-name suffixes that mark a native game executable.
    ///
    /// Linux Steam libraries hold both Proton installs (`.exe`) and native
    /// builds, which conventionally ship an `.x86_64` binary or a launch script.
    pub const fn executable_suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Win32 => &[".exe"],
            Self::Darwin => &[".app"],
            Self::Linux => &[".exe", ".x86_64", ".sh"],
        }
    }
}

impl fmt::Display for OsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Win32 => "win32",
            Self::Darwin => "darwin",
            Self::Linux => "linux",
        };
        f.write_str(label)
    }
}

/// Which launchers appear to be installed, derived per detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherPresenceSet {
    pub steam: bool,
    pub epic: bool,
    pub battlenet: bool,
    pub origin: bool,
}

impl LauncherPresenceSet {
    pub const fn contains(&self, launcher: Launcher) -> bool {
        match launcher {
            Launcher::Steam => self.steam,
            Launcher::Epic => self.epic,
            Launcher::BattleNet => self.battlenet,
            Launcher::Origin => self.origin,
        }
    }

    pub const fn set(&mut self, launcher: Launcher, present: bool) {
        match launcher {
            Launcher::Steam => self.steam = present,
            Launcher::Epic => self.epic = present,
            Launcher::BattleNet => self.battlenet = present,
            Launcher::Origin => self.origin = present,
        }
    }

    /// Present launchers in declared detection order.
    pub fn iter_present(&self) -> impl Iterator<Item = Launcher> + '_ {
        Launcher::ALL
            .into_iter()
            .filter(|launcher| self.contains(*launcher))
    }
}
