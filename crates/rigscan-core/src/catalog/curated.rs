use crate::domain::{GameRecord, Launcher};

const STEAM_TITLES: &[&str] = &["Counter-Strike 2", "Baldur's Gate 3"];
const EPIC_TITLES: &[&str] = &["Fortnite", "Rocket League"];
const BATTLENET_TITLES: &[&str] = &["Diablo IV", "Call of Duty: Modern Warfare III"];

/// Popular titles assumed present when a launcher is detected but its
/// library cannot be read.
///
/// This is static knowledge, not a scan: records carry no install path.
/// Origin has no curated list.
pub fn curated_games(launcher: Launcher) -> Vec<GameRecord> {
    let titles = match launcher {
        Launcher::Steam => STEAM_TITLES,
        Launcher::Epic => EPIC_TITLES,
        Launcher::BattleNet => BATTLENET_TITLES,
        Launcher::Origin => &[],
    };

    let Some(platform) = launcher.platform() else {
        return Vec::new();
    };

    titles
        .iter()
        .filter_map(|title| GameRecord::new(*title, platform))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_IMAGE_REF;
    use crate::domain::Platform;

    #[test]
    fn test_steam_list_order() {
        let games = curated_games(Launcher::Steam);
        let ids: Vec<_> = games.iter().map(GameRecord::id).collect();
        assert_eq!(ids, vec!["counterstrike2", "baldursgate3"]);
        assert!(games.iter().all(|g| g.platform() == Platform::Steam));
    }

    #[test]
    fn test_curated_titles_have_artwork() {
        for launcher in Launcher::ALL {
            for game in curated_games(launcher) {
                assert_ne!(game.image_ref(), PLACEHOLDER_IMAGE_REF, "{}", game.name());
                assert!(game.install_path().is_none());
            }
        }
    }

    #[test]
    fn test_origin_is_empty() {
        assert!(curated_games(Launcher::Origin).is_empty());
    }
}
