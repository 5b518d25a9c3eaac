use serde::{Deserialize, Serialize};

/// Awakening (`card_awaken`) or rebirth (`card_super_awaken`) recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAwaken {
    #[serde(rename = "_id")]
    pub id: i32,
    pub base_card_id: i32,
    pub result_card_id: i32,
    /// Success chance.
    pub percent: i32,
    pub material_1_item: i32,
    pub material_1_count: i32,
    pub material_2_item: i32,
    pub material_2_count: i32,
    pub material_3_item: i32,
    pub material_3_count: i32,
    pub material_4_item: i32,
    pub material_4_count: i32,
    pub order: i32,
    pub is_closed: i32,
}

impl CardAwaken {
    /// Closed recipes are no longer offered and are ignored when linking cards.
    pub fn is_open(&self) -> bool {
        self.is_closed == 0
    }

    /// `(item id, count)` pairs for the used material slots.
    pub fn materials(&self) -> Vec<(i32, i32)> {
        [
            (self.material_1_item, self.material_1_count),
            (self.material_2_item, self.material_2_count),
            (self.material_3_item, self.material_3_count),
            (self.material_4_item, self.material_4_count),
        ]
        .into_iter()
        .filter(|(item, count)| *item > 0 && *count > 0)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materials_skip_empty_slots() {
        let recipe = CardAwaken {
            material_1_item: 5,
            material_1_count: 10,
            material_2_item: 6,
            material_3_item: 7,
            material_3_count: 2,
            material_4_count: 4,
            ..CardAwaken::default()
        };
        assert_eq!(recipe.materials(), vec![(5, 10), (7, 2)]);
        assert!(CardAwaken::default().materials().is_empty());
    }

    #[test]
    fn closed_flag_hides_recipe() {
        let mut recipe = CardAwaken::default();
        assert!(recipe.is_open());
        recipe.is_closed = 1;
        assert!(!recipe.is_open());
    }
}
