use serde::{Deserialize, Serialize};

/// Sacred relic set from `series` and the cards awarded for completing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relic {
    #[serde(rename = "_id")]
    pub id: i32,
    pub treasure_id_1: i32,
    pub treasure_id_2: i32,
    pub treasure_id_3: i32,
    pub treasure_id_4: i32,
    pub treasure_id_5: i32,
    pub treasure_id_6: i32,
    pub bonus_card_id_1: i32,
    pub bonus_card_id_2: i32,
    pub bonus_card_id_3: i32,
    pub event_flg: i32,
    pub area_attribute: i32,
    pub public_flg: i32,
    pub order: i32,
}

impl Relic {
    pub fn treasure_ids(&self) -> [i32; 6] {
        [
            self.treasure_id_1,
            self.treasure_id_2,
            self.treasure_id_3,
            self.treasure_id_4,
            self.treasure_id_5,
            self.treasure_id_6,
        ]
    }

    pub fn bonus_card_ids(&self) -> [i32; 3] {
        [self.bonus_card_id_1, self.bonus_card_id_2, self.bonus_card_id_3]
    }
}
