//! Structural checks over a loaded repository: duplicate ids, id spaces that force the
//! fallback scan, and foreign keys that point nowhere. Never fails a load.

use std::collections::HashSet;
use std::fmt;

use crate::data::{Card, Repository, SkillSlot};
use crate::link::lookup::first_gap;
use crate::link::{position_by_id, Identified, LookupStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Check every collection's id space and every stored foreign key.
///
/// Lookups made here are counted separately from the repository's own [`LookupStats`].
pub fn validate_references(repo: &Repository) -> ValidationReport {
    let mut report = ValidationReport::default();
    let stats = LookupStats::default();

    check_ids(&mut report, "cards", repo.cards());
    check_ids(&mut report, "skills", repo.skills());
    check_ids(&mut report, "card_character", repo.characters());
    check_ids(&mut report, "fusion_list", repo.amalgamations());
    check_ids(&mut report, "card_awaken", repo.awakenings());
    check_ids(&mut report, "card_super_awaken", repo.rebirths());
    check_ids(&mut report, "follower_kinds", repo.follower_kinds());
    check_ids(&mut report, "kings", repo.archwitches());
    check_ids(&mut report, "king_series", repo.archwitch_series());
    check_ids(&mut report, "king_friendship", repo.archwitch_friendships());
    check_ids(&mut report, "series", repo.relics());
    check_ids(&mut report, "levels", repo.levels());
    check_ids(&mut report, "deck_bonus", repo.deck_bonuses());
    check_ids(&mut report, "deck_bonus_cond", repo.deck_bonus_conditions());

    let mut refs = RefChecker {
        report: &mut report,
        stats: &stats,
    };

    for card in repo.cards() {
        let context = card_context(card);
        refs.check(&context, "card_chara_id", card.card_chara_id, repo.characters());
        for slot in SkillSlot::ALL {
            refs.check(&context, slot.as_str(), card.skill_id(slot), repo.skills());
        }
        refs.check(&context, "evolution_card_id", card.evolution_card_id, repo.cards());
        refs.check(&context, "trans_card_id", card.trans_card_id, repo.cards());
        refs.check(&context, "follower_kind_id", card.follower_kind_id, repo.follower_kinds());
    }

    for recipe in repo.amalgamations() {
        let context = format!("fusion_list {}", recipe.id);
        for (field, id) in [
            ("material_1", recipe.material_1),
            ("material_2", recipe.material_2),
            ("material_3", recipe.material_3),
            ("material_4", recipe.material_4),
            ("fusion_card_id", recipe.fusion_card_id),
        ] {
            refs.check(&context, field, id, repo.cards());
        }
    }

    for (key, recipes) in [
        ("card_awaken", repo.awakenings()),
        ("card_super_awaken", repo.rebirths()),
    ] {
        for recipe in recipes.iter().filter(|recipe| recipe.is_open()) {
            let context = format!("{key} {}", recipe.id);
            refs.check(&context, "base_card_id", recipe.base_card_id, repo.cards());
            refs.check(&context, "result_card_id", recipe.result_card_id, repo.cards());
        }
    }

    for aw in repo.archwitches() {
        let context = format!("kings {}", aw.id);
        refs.check(&context, "card_master_id", aw.card_master_id, repo.cards());
        refs.check(&context, "king_series_id", aw.king_series_id, repo.archwitch_series());
    }

    for series in repo.archwitch_series() {
        let context = format!("king_series {}", series.id);
        refs.check(&context, "reward_card_id", series.reward_card_id, repo.cards());
    }

    for rate in repo.archwitch_friendships() {
        let context = format!("king_friendship {}", rate.id);
        refs.check(&context, "king_id", rate.king_id, repo.archwitches());
    }

    for relic in repo.relics() {
        let context = format!("series {}", relic.id);
        for id in relic.bonus_card_ids() {
            refs.check(&context, "bonus_card_id", id, repo.cards());
        }
    }

    for cond in repo.deck_bonus_conditions() {
        let context = format!("deck_bonus_cond {}", cond.id);
        refs.check(&context, "deck_bonus_id", cond.deck_bonus_id, repo.deck_bonuses());
    }

    tracing::debug!(
        diagnostics = report.diagnostics.len(),
        errors = report.count(ValidationSeverity::Error),
        fallback_scans = stats.fallback_scans(),
        "validated references"
    );
    report
}

fn card_context(card: &Card) -> String {
    if card.name.is_empty() {
        format!("cards {}", card.id)
    } else {
        format!("cards {} ({})", card.id, card.name)
    }
}

fn check_ids<T: Identified>(report: &mut ValidationReport, key: &str, items: &[T]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            report.push(
                ValidationSeverity::Error,
                key,
                format!(
                    "duplicate _id {}; lookups return the record at position _id - 1 when it \
                     carries this id, otherwise the first match",
                    item.id()
                ),
            );
        }
    }
    if let Some(index) = first_gap(items) {
        report.push(
            ValidationSeverity::Info,
            key,
            format!(
                "_id {} at position {index} breaks the 1-based sequence; lookups past it scan",
                items[index].id()
            ),
        );
    }
}

struct RefChecker<'r> {
    report: &'r mut ValidationReport,
    stats: &'r LookupStats,
}

impl RefChecker<'_> {
    fn check<T: Identified>(&mut self, context: &str, field: &str, id: i32, targets: &[T]) {
        if id <= 0 || position_by_id(targets, id, self.stats).is_some() {
            return;
        }
        self.report.push(
            ValidationSeverity::Warning,
            context,
            format!("{field} {id} does not match any record"),
        );
    }
}
