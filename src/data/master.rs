use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::data::{
    Amalgamation, Archwitch, ArchwitchFriendship, ArchwitchSeries, Card, CardAwaken,
    CardCharacter, DeckBonus, DeckBonusCond, FollowerKind, Level, Relic, Skill,
};
use crate::error::LoadError;

/// Record collections decoded from the master document. Missing keys decode as empty
/// collections and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MasterData {
    pub version: Option<i64>,
    pub cards: Vec<Card>,
    pub skills: Vec<Skill>,
    #[serde(rename = "fusion_list")]
    pub amalgamations: Vec<Amalgamation>,
    #[serde(rename = "card_awaken")]
    pub awakenings: Vec<CardAwaken>,
    #[serde(rename = "card_super_awaken")]
    pub rebirths: Vec<CardAwaken>,
    #[serde(rename = "card_character")]
    pub characters: Vec<CardCharacter>,
    pub follower_kinds: Vec<FollowerKind>,
    #[serde(rename = "kings")]
    pub archwitches: Vec<Archwitch>,
    #[serde(rename = "king_series")]
    pub archwitch_series: Vec<ArchwitchSeries>,
    #[serde(rename = "king_friendship")]
    pub archwitch_friendships: Vec<ArchwitchFriendship>,
    #[serde(rename = "series")]
    pub relics: Vec<Relic>,
    pub levels: Vec<Level>,
    #[serde(rename = "deck_bonus")]
    pub deck_bonuses: Vec<DeckBonus>,
    #[serde(rename = "deck_bonus_cond")]
    pub deck_bonus_conditions: Vec<DeckBonusCond>,
}

/// Decode the master document. `path` is only used for error context.
///
/// The extracted file carries zero padding after the JSON payload, which is stripped first.
/// An explicit `null` anywhere decodes the same as an absent key: zero, empty text or an
/// empty collection.
pub fn decode_master_data(bytes: &[u8], path: &Path) -> Result<MasterData, LoadError> {
    let end = bytes
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |last| last + 1);
    let parse_error = |err: serde_json::Error| LoadError::Parse {
        target: "master data",
        path: path.to_path_buf(),
        detail: err.to_string(),
    };
    let mut doc: Value = serde_json::from_slice(&bytes[..end]).map_err(parse_error)?;
    drop_nulls(&mut doc);
    MasterData::deserialize(doc).map_err(parse_error)
}

/// Remove `null` members from every object in the tree.
fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(members) => {
            members.retain(|_, member| !member.is_null());
            members.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

pub fn load_master_data(path: impl AsRef<Path>) -> Result<MasterData, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let master = decode_master_data(&bytes, path)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        version = ?master.version,
        "decoded master data"
    );
    Ok(master)
}
