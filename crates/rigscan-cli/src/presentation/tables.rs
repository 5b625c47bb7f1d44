//! Plain-text tables for terminal output.

use std::fmt::Write as _;

use rigscan_core::{GameRecord, Launcher, LauncherPresenceSet, SystemSpecs};

const NAME_WIDTH: usize = 36;
const ID_WIDTH: usize = 28;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// One row per game: name, identifier, platform and install path.
pub fn format_games_table(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return "No installed games detected.".to_string();
    }

    let mut out = format!(
        "{:<NAME_WIDTH$}  {:<ID_WIDTH$}  {:<10}  PATH\n",
        "NAME", "ID", "PLATFORM"
    );
    out.push_str(&"-".repeat(NAME_WIDTH + ID_WIDTH + 20));
    for game in games {
        let path = game
            .install_path()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        let _ = write!(
            out,
            "\n{:<NAME_WIDTH$}  {:<ID_WIDTH$}  {:<10}  {path}",
            truncate_string(game.name(), NAME_WIDTH),
            truncate_string(game.id(), ID_WIDTH),
            game.platform().to_string(),
        );
    }
    out
}

/// `key = value` lines, in the same order as the JSON fields.
pub fn format_specs(specs: &SystemSpecs) -> String {
    format!(
        "cpu = {}\ngpu = {}\nram_gb = {}\nstorage = {}\nresolution = {}\nrefresh_rate_hz = {}\nhdr = {}",
        specs.cpu,
        specs.gpu,
        specs.ram_gb.gigabytes(),
        specs.storage,
        specs.monitor.resolution,
        specs.monitor.refresh_rate_hz.hertz(),
        specs.monitor.hdr,
    )
}

pub fn format_launchers(presence: &LauncherPresenceSet) -> String {
    Launcher::ALL
        .into_iter()
        .map(|launcher| {
            let state = if presence.contains(launcher) {
                "detected"
            } else {
                "not detected"
            };
            format!("{launcher} ({}) = {state}", launcher.scheme())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
