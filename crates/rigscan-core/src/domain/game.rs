//! Installed-game records.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{image_ref, normalize};

/// Distribution platform a game record was attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Steam,
    Epic,
    #[serde(rename = "Battle.net")]
    BattleNet,
    Custom,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Steam => "Steam",
            Self::Epic => "Epic",
            Self::BattleNet => "Battle.net",
            Self::Custom => "Custom",
        };
        f.write_str(label)
    }
}

/// A single installed (or presumed installed) game.
///
/// Records are values: they are created fresh by every scan and never
/// mutated afterwards. The identifier is always derived from the name via
/// [`normalize`], so two scans of the same directory produce equal records.
///
/// Identifiers are not unique across launchers; callers that display
/// several launchers' results side by side must not key on `id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGameRecord")]
pub struct GameRecord {
    id: String,
    name: String,
    image_ref: String,
    platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    install_path: Option<PathBuf>,
}

/// A record received over the wire that breaks the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGameRecord {
    #[error("Game record has an empty {0}")]
    Empty(&'static str),
}

/// Wire shape of [`GameRecord`], validated on conversion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameRecord {
    id: String,
    name: String,
    #[serde(default)]
    image_ref: String,
    platform: Platform,
    #[serde(default)]
    install_path: Option<PathBuf>,
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = InvalidGameRecord;

    fn try_from(raw: RawGameRecord) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(InvalidGameRecord::Empty("id"));
        }
        if raw.name.trim().is_empty() {
            return Err(InvalidGameRecord::Empty("name"));
        }

        // An image is always present; fall back to the catalog lookup.
        let image_ref = if raw.image_ref.trim().is_empty() {
            image_ref(&raw.name).to_string()
        } else {
            raw.image_ref
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            image_ref,
            platform: raw.platform,
            install_path: raw.install_path,
        })
    }
}

impl GameRecord {
    /// Build a record from a display name.
    ///
    /// Returns `None` when the name normalizes to an empty identifier
    /// (e.g. a directory called `"!!!"`), since such a record would violate
    /// the non-empty `id` guarantee.
    pub fn new(name: impl Into<String>, platform: Platform) -> Option<Self> {
        let name = name.into();
        let id = normalize(&name);
        if id.is_empty() {
            return None;
        }

        Some(Self {
            image_ref: image_ref(&name).to_string(),
            id,
            name,
            platform,
            install_path: None,
        })
    }

    /// Attach the directory the game was found in.
    #[must_use]
    pub fn with_install_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.install_path = Some(path.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    pub fn install_path(&self) -> Option<&Path> {
        self.install_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_IMAGE_REF;

    #[test]
    fn test_id_derived_from_name() {
        let record = GameRecord::new("Half-Life 2", Platform::Steam).unwrap();
        assert_eq!(record.id(), "halflife2");
        assert_eq!(record.name(), "Half-Life 2");
        assert_eq!(record.image_ref(), PLACEHOLDER_IMAGE_REF);
        assert!(record.install_path().is_none());
    }

    #[test]
    fn test_unnormalizable_name_is_rejected() {
        assert!(GameRecord::new("!!!", Platform::Epic).is_none());
        assert!(GameRecord::new("", Platform::Epic).is_none());
    }

    #[test]
    fn test_serializes_platform_label() {
        let record = GameRecord::new("Diablo IV", Platform::BattleNet)
            .unwrap()
            .with_install_path("/games/Diablo IV");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["platform"], "Battle.net");
        assert_eq!(json["id"], "diabloiv");
        assert_eq!(json["installPath"], "/games/Diablo IV");
        assert!(json["imageRef"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_deserializes_bridge_payload() {
        let payload = r#"{"id":"fortnite","name":"Fortnite","imageRef":"x","platform":"Epic"}"#;
        let record: GameRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.platform(), Platform::Epic);
        assert!(record.install_path().is_none());
    }

    #[test]
    fn test_rejects_payload_with_empty_fields() {
        let empty_id = r#"{"id":"","name":"Fortnite","imageRef":"x","platform":"Epic"}"#;
        let err = serde_json::from_str::<GameRecord>(empty_id).unwrap_err();
        assert!(err.to_string().contains("empty id"), "{err}");

        let blank_name = r#"{"id":"fortnite","name":"  ","imageRef":"x","platform":"Epic"}"#;
        let err = serde_json::from_str::<GameRecord>(blank_name).unwrap_err();
        assert!(err.to_string().contains("empty name"), "{err}");
    }

    #[test]
    fn test_missing_image_falls_back_to_catalog() {
        let payload = r#"{"id":"mystery","name":"Mystery Game","imageRef":"","platform":"Custom"}"#;
        let record: GameRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.image_ref(), PLACEHOLDER_IMAGE_REF);

        let payload = r#"{"id":"mystery","name":"Mystery Game","platform":"Custom"}"#;
        let record: GameRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.image_ref(), PLACEHOLDER_IMAGE_REF);
    }
}
