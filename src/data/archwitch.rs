use serde::{Deserialize, Serialize};

/// Archwitch encounter from `kings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Archwitch {
    #[serde(rename = "_id")]
    pub id: i32,
    pub king_series_id: i32,
    /// Card shown for the encounter.
    pub card_master_id: i32,
    pub status_group_id: i32,
    pub public_flg: i32,
    pub rare_flg: i32,
    pub rare_intensity: i32,
    pub battle_time: i32,
    pub exp: i32,
    pub max_friendship: i32,
    pub skill_id_1: i32,
    pub skill_id_2: i32,
    pub weather_id: i32,
    pub model_name: String,
    pub chain_ratio_2: i32,
    pub servant_id_1: i32,
    pub servant_id_2: i32,
}

/// Archwitch event (`king_series`) and its reward card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchwitchSeries {
    #[serde(rename = "_id")]
    pub id: i32,
    pub reward_card_id: i32,
    pub public_start_datetime: i64,
    pub public_end_datetime: i64,
    pub receive_limit_datetime: i64,
    pub is_beginner_king: i32,
}

/// Chance of friendship going up on an archwitch (`king_friendship`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchwitchFriendship {
    #[serde(rename = "_id")]
    pub id: i32,
    pub king_id: i32,
    pub friendship: i32,
    pub up_rate: i32,
}
