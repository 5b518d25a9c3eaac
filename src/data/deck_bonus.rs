use serde::{Deserialize, Serialize};

/// Unit bonus from `deck_bonus`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckBonus {
    #[serde(rename = "_id")]
    pub id: i32,
    /// ATK or DEF.
    pub atk_def_flg: i32,
    pub value_type: i32,
    pub value: i32,
    pub down_grade: i32,
    pub cond_type: i32,
    /// Cards required.
    pub req_num: i32,
    pub dup_flg: i32,
}

/// Condition attached to a deck bonus (`deck_bonus_cond`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckBonusCond {
    #[serde(rename = "_id")]
    pub id: i32,
    pub deck_bonus_id: i32,
    pub group: i32,
    pub cond_type_id: i32,
    pub ref_id: i32,
}
