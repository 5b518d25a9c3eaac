use serde::{Deserialize, Serialize};

use crate::link::{labels, MemoSlot};

/// One card record from the master document's `cards` collection.
/// `name` comes from `MsgCardName` and is bound by position after decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: i32,
    /// Image number, see [`Card::image_name`].
    pub card_no: i32,
    pub card_chara_id: i32,
    pub card_rare_id: i32,
    pub card_type_id: i32,
    pub deck_cost: i32,
    pub last_evolution_rank: i32,
    pub evolution_rank: i32,
    /// -1 when the card does not evolve.
    pub evolution_card_id: i32,
    /// Result of an evolution accident.
    pub trans_card_id: i32,
    pub follower_kind_id: i32,
    pub default_follower: i32,
    pub max_follower: i32,
    pub default_offense: i32,
    pub max_offense: i32,
    pub default_defense: i32,
    pub max_defense: i32,
    pub skill_id_1: i32,
    pub skill_id_2: i32,
    /// Awakened Burst.
    pub special_skill_id_1: i32,
    pub medal_rate: i32,
    pub price: i32,
    pub is_closed: i32,
    #[serde(skip_deserializing)]
    pub name: String,
    #[serde(skip)]
    pub(crate) links: CardLinks,
}

/// Memo slots for the card's stored foreign keys.
#[derive(Debug, Clone, Default)]
pub(crate) struct CardLinks {
    pub(crate) character: MemoSlot,
    pub(crate) skills: [MemoSlot; 3],
}

/// The three skill references a card carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillSlot {
    Primary,
    Secondary,
    Special,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 3] = [SkillSlot::Primary, SkillSlot::Secondary, SkillSlot::Special];

    pub(crate) fn index(self) -> usize {
        match self {
            SkillSlot::Primary => 0,
            SkillSlot::Secondary => 1,
            SkillSlot::Special => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillSlot::Primary => "skill_id_1",
            SkillSlot::Secondary => "skill_id_2",
            SkillSlot::Special => "special_skill_id_1",
        }
    }
}

impl Card {
    /// Zero-padded image file stem, e.g. `cd_00042`.
    pub fn image_name(&self) -> String {
        format!("cd_{:05}", self.card_no)
    }

    pub fn element(&self) -> &'static str {
        labels::element(self.card_type_id)
    }

    pub fn rarity(&self) -> &'static str {
        labels::rarity(self.card_rare_id)
    }

    pub fn skill_id(&self, slot: SkillSlot) -> i32 {
        match slot {
            SkillSlot::Primary => self.skill_id_1,
            SkillSlot::Secondary => self.skill_id_2,
            SkillSlot::Special => self.special_skill_id_1,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed != 0
    }

    /// Whether the character reference on this card has been looked up yet.
    pub fn is_character_resolved(&self) -> bool {
        self.links.character.is_resolved()
    }

    /// Whether the skill reference in `slot` has been looked up yet.
    pub fn is_skill_resolved(&self, slot: SkillSlot) -> bool {
        self.links.skills[slot.index()].is_resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_fields_and_ignores_the_rest() {
        let card: Card = serde_json::from_str(
            r#"{"_id": 7, "card_no": 42, "card_type_id": 2, "card_rare_id": 3,
                "skill_id_1": 11, "special_skill_id_1": -1, "unexpected": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(card.id, 7);
        assert_eq!(card.skill_id(SkillSlot::Primary), 11);
        assert_eq!(card.skill_id(SkillSlot::Secondary), 0);
        assert_eq!(card.skill_id(SkillSlot::Special), -1);
        assert!(card.name.is_empty());
        assert!(!card.is_character_resolved());
    }

    #[test]
    fn name_in_the_document_is_not_trusted() {
        let card: Card = serde_json::from_str(r#"{"_id": 1, "name": "from json"}"#).unwrap();
        assert!(card.name.is_empty());
    }

    #[test]
    fn presentation_values() {
        let card = Card {
            card_no: 42,
            card_type_id: 2,
            card_rare_id: 3,
            ..Card::default()
        };
        assert_eq!(card.image_name(), "cd_00042");
        assert_eq!(card.element(), "Passion");
        assert_eq!(card.rarity(), "SR");
    }
}
