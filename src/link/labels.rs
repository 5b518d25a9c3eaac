//! Enumerated id → display label tables.

const ELEMENTS: [&str; 5] = ["Light", "Passion", "Cool", "Dark", "Special"];

const RARITIES: [&str; 11] = [
    "N", "R", "SR", "HN", "HR", "HSR", "X", "UR", "HUR", "GSR", "GUR",
];

const TARGET_SCOPES: &[(i32, &str)] = &[(-1, "N/A"), (1, "Allies"), (2, "Enemies")];

const TARGET_LOGICS: &[(i32, &str)] = &[
    (1, "Target Field"),
    (2, "Lowest HP"),
    (3, "Single Random"),
    (4, "unknown, maybe max HP"),
    (8, "Random Target"),
    (9, "Self"),
    (10, "Opposing Element"),
    (12, "All Dead"),
    (13, "Single Dead, Random"),
    (14, "Same Element"),
    (16, "Random Target Skill"),
    (17, "Dead and Alive"),
];

fn one_based(table: &[&'static str], id: i32) -> &'static str {
    if id <= 0 {
        return "";
    }
    table.get((id - 1) as usize).copied().unwrap_or("")
}

fn sparse(table: &[(i32, &'static str)], id: i32) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Card element (`card_type_id`).
pub fn element(id: i32) -> &'static str {
    one_based(&ELEMENTS, id)
}

/// Card rarity (`card_rare_id`).
pub fn rarity(id: i32) -> &'static str {
    one_based(&RARITIES, id)
}

/// Who a skill affects (`target_scope_id`).
pub fn target_scope(id: i32) -> &'static str {
    sparse(TARGET_SCOPES, id)
}

/// How a skill picks its targets (`target_logic_id`).
pub fn target_logic(id: i32) -> &'static str {
    sparse(TARGET_LOGICS, id)
}
