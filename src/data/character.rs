use serde::{Deserialize, Serialize};

/// Character record from `card_character`, shared by every card of the character.
/// All text fields are bound from the `MsgChara*` string tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCharacter {
    #[serde(rename = "_id")]
    pub id: i32,
    pub hidden_param_1: i32,
    pub hidden_param_2: i32,
    pub hidden_param_3: i32,
    pub max_friendship: i32,
    #[serde(skip_deserializing)]
    pub description: String,
    #[serde(skip_deserializing)]
    pub friendship: String,
    #[serde(skip_deserializing)]
    pub login: String,
    #[serde(skip_deserializing)]
    pub meet: String,
    #[serde(skip_deserializing)]
    pub battle_start: String,
    #[serde(skip_deserializing)]
    pub battle_end: String,
    #[serde(skip_deserializing)]
    pub friendship_max: String,
    #[serde(skip_deserializing)]
    pub friendship_event: String,
}
