use serde::{Deserialize, Serialize};

/// Kingdom level (`levels`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    #[serde(rename = "_id")]
    pub id: i32,
    pub energy: i32,
    pub exp: i32,
    pub friend_num: i32,
    pub deck_cost: i32,
    pub npc_cost: i32,
    pub king_cost: i32,
}

/// Soldier replenishment cost for a card (`follower_kinds`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerKind {
    #[serde(rename = "_id")]
    pub id: i32,
    pub coin: i32,
    pub iron: i32,
    pub ether: i32,
    pub speed: i32,
}
