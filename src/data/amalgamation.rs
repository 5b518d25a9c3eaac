use serde::{Deserialize, Serialize};

/// Fusion recipe from `fusion_list`: up to four material cards into one result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amalgamation {
    #[serde(rename = "_id")]
    pub id: i32,
    pub material_1: i32,
    pub material_2: i32,
    pub material_3: i32,
    pub material_4: i32,
    pub fusion_card_id: i32,
}

impl Amalgamation {
    /// Material card ids in recipe order, skipping unused slots.
    pub fn materials(&self) -> impl Iterator<Item = i32> + '_ {
        [self.material_1, self.material_2, self.material_3, self.material_4]
            .into_iter()
            .filter(|id| *id > 0)
    }

    /// Recipes always take at least two materials.
    pub fn material_count(&self) -> usize {
        if self.material_4 > 0 {
            4
        } else if self.material_3 > 0 {
            3
        } else {
            2
        }
    }

    pub fn uses_material(&self, card_id: i32) -> bool {
        card_id > 0 && self.materials().any(|id| id == card_id)
    }

    pub fn produces(&self, card_id: i32) -> bool {
        card_id > 0 && self.fusion_card_id == card_id
    }

    /// Card appears as any material or as the result.
    pub fn involves(&self, card_id: i32) -> bool {
        self.uses_material(card_id) || self.produces(card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Amalgamation {
        Amalgamation {
            id: 1,
            material_1: 10,
            material_2: 11,
            material_3: 12,
            material_4: -1,
            fusion_card_id: 20,
        }
    }

    #[test]
    fn materials_skip_unused_slots() {
        assert_eq!(recipe().materials().collect::<Vec<_>>(), vec![10, 11, 12]);
        assert_eq!(recipe().material_count(), 3);
    }

    #[test]
    fn membership_covers_materials_and_result() {
        let recipe = recipe();
        assert!(recipe.involves(11));
        assert!(recipe.involves(20));
        assert!(!recipe.uses_material(20));
        assert!(!recipe.involves(-1));
        assert!(!recipe.involves(13));
    }
}
