//! Skill text templating and proc-count rendering.

use std::fmt;

const MAGNITUDE_PLACEHOLDERS: [&str; 3] = ["{1:x}", "{1:}", "{1}"];
const RATIO_PLACEHOLDERS: [&str; 3] = ["{2:x}", "{2:}", "{2}"];

/// Fill a skill description template with an effect value and a ratio.
pub fn render_skill_text(template: &str, value: i32, ratio: i32) -> String {
    let value = value.to_string();
    let ratio = ratio.to_string();
    let mut text = template.to_string();
    for placeholder in MAGNITUDE_PLACEHOLDERS {
        text = text.replace(placeholder, &value);
    }
    for placeholder in RATIO_PLACEHOLDERS {
        text = text.replace(placeholder, &ratio);
    }
    text
}

/// How many times a skill can fire in one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcCount {
    Limited(i32),
    Infinite,
}

impl ProcCount {
    /// Battle-start skills carry arbitrary stored counts but can only ever fire once.
    pub fn from_skill(min_text: &str, max_count: i32) -> Self {
        if min_text.to_lowercase().contains("battle start") {
            ProcCount::Limited(1)
        } else if max_count < 0 {
            ProcCount::Infinite
        } else {
            ProcCount::Limited(max_count)
        }
    }
}

impl fmt::Display for ProcCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcCount::Limited(count) => write!(f, "{count}"),
            ProcCount::Infinite => f.write_str("Infinite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_min_and_max_descriptions() {
        let template = "Deals {1:x} damage, {2:}% chance";
        assert_eq!(render_skill_text(template, 100, 30), "Deals 100 damage, 30% chance");
        assert_eq!(render_skill_text(template, 150, 60), "Deals 150 damage, 60% chance");
    }

    #[test]
    fn every_ratio_placeholder_variant_is_filled() {
        assert_eq!(render_skill_text("{2:x}/{2:}/{2}", 0, 7), "7/7/7");
        assert_eq!(render_skill_text("no placeholders", 1, 2), "no placeholders");
    }

    #[test]
    fn battle_start_forces_a_single_proc() {
        let count = ProcCount::from_skill("At Battle Start raise ATK", 5);
        assert_eq!(count, ProcCount::Limited(1));
        assert_eq!(count.to_string(), "1");
        assert_eq!(ProcCount::from_skill("BATTLE START", -1).to_string(), "1");
    }

    #[test]
    fn negative_count_is_infinite() {
        assert_eq!(ProcCount::from_skill("Raise ATK", -1).to_string(), "Infinite");
    }

    #[test]
    fn stored_count_is_reported_verbatim() {
        assert_eq!(ProcCount::from_skill("Raise ATK", 3).to_string(), "3");
        assert_eq!(ProcCount::from_skill("Raise ATK", 0).to_string(), "0");
    }
}
