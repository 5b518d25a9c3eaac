use serde::{Deserialize, Serialize};

use crate::link::{labels, render_skill_text, ProcCount};

/// Skill record from `skills`. `name`, `description` and `fire` are bound from
/// `MsgSkillName`, `MsgSkillDesc` and `MsgSkillFire`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: i32,
    pub level_type: i32,
    #[serde(rename = "_type")]
    pub kind: i32,
    pub timing_id: i32,
    /// Negative means unlimited.
    pub max_count: i32,
    pub cond_scene_id: i32,
    pub cond_side_id: i32,
    pub cond_id: i32,
    pub king_series_id: i32,
    pub king_id: i32,
    pub cond_param: i32,
    pub default_ratio: i32,
    pub max_ratio: i32,
    pub public_start_datetime: i64,
    pub public_end_datetime: i64,
    pub effect_id: i32,
    pub effect_param: i32,
    pub effect_param_2: i32,
    pub effect_param_3: i32,
    pub effect_param_4: i32,
    pub effect_param_5: i32,
    pub effect_default_value: i32,
    pub effect_max_value: i32,
    pub target_scope_id: i32,
    pub target_logic_id: i32,
    pub target_param: i32,
    pub animation_id: i32,
    #[serde(skip_deserializing)]
    pub name: String,
    #[serde(skip_deserializing)]
    pub description: String,
    #[serde(skip_deserializing)]
    pub fire: String,
}

impl Skill {
    /// Description at the default effect value and ratio.
    pub fn render_min(&self) -> String {
        render_skill_text(&self.description, self.effect_default_value, self.default_ratio)
    }

    /// Description at the max effect value and ratio.
    pub fn render_max(&self) -> String {
        render_skill_text(&self.description, self.effect_max_value, self.max_ratio)
    }

    pub fn fire_min(&self) -> String {
        render_skill_text(&self.fire, self.effect_default_value, -1)
    }

    pub fn fire_max(&self) -> String {
        render_skill_text(&self.fire, self.effect_max_value, -1)
    }

    pub fn proc_count(&self) -> ProcCount {
        ProcCount::from_skill(&self.render_min(), self.max_count)
    }

    pub fn target_scope(&self) -> &'static str {
        labels::target_scope(self.target_scope_id)
    }

    pub fn target_logic(&self) -> &'static str {
        labels::target_logic(self.target_logic_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(description: &str, max_count: i32) -> Skill {
        Skill {
            id: 1,
            description: description.to_string(),
            effect_default_value: 100,
            effect_max_value: 150,
            default_ratio: 30,
            max_ratio: 60,
            max_count,
            ..Skill::default()
        }
    }

    #[test]
    fn renders_both_description_levels() {
        let skill = skill("Deals {1:x} damage, {2:}% chance", 3);
        assert_eq!(skill.render_min(), "Deals 100 damage, 30% chance");
        assert_eq!(skill.render_max(), "Deals 150 damage, 60% chance");
    }

    #[test]
    fn fire_text_uses_a_negative_ratio() {
        let mut skill = skill("", 1);
        skill.fire = "Heals {1} ({2})".to_string();
        assert_eq!(skill.fire_min(), "Heals 100 (-1)");
        assert_eq!(skill.fire_max(), "Heals 150 (-1)");
    }

    #[test]
    fn proc_count_reads_the_min_rendering() {
        assert_eq!(skill("At Battle Start raise ATK {1:x}%", 5).proc_count().to_string(), "1");
        assert_eq!(skill("Raise ATK {1:x}%", -1).proc_count().to_string(), "Infinite");
        assert_eq!(skill("Raise ATK {1:x}%", 3).proc_count().to_string(), "3");
    }

    #[test]
    fn target_labels() {
        let skill = Skill {
            target_scope_id: 2,
            target_logic_id: 10,
            ..Skill::default()
        };
        assert_eq!(skill.target_scope(), "Enemies");
        assert_eq!(skill.target_logic(), "Opposing Element");
    }

    #[test]
    fn type_field_is_renamed() {
        let skill: Skill = serde_json::from_str(r#"{"_id": 3, "_type": 2, "max_count": -1}"#).unwrap();
        assert_eq!(skill.kind, 2);
        assert_eq!(skill.max_count, -1);
    }
}
