//! Asset layout: where the master document and string tables live under an extracted root.
//! Defaults match the game's `files/` directory; the language pack can be switched with
//! `VC_GROUPER_LANG`.

use std::path::{Path, PathBuf};

pub const DEFAULT_MASTER_DATA_PATH: &str = "response/master_all.dat";
pub const DEFAULT_STRING_DIR: &str = "string";
pub const DEFAULT_LANG_PACK: &str = "en";

/// Environment variable selecting the language pack suffix (`MsgCardName_<lang>.strb`).
pub const LANG_PACK_ENV: &str = "VC_GROUPER_LANG";

/// One localized text category, i.e. one `.strb` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringTable {
    CardName,
    CharaDescription,
    CharaFriendship,
    CharaWelcome,
    CharaMeet,
    CharaBattleStart,
    CharaBattleEnd,
    CharaFriendshipMax,
    CharaBonds,
    SkillName,
    SkillDescription,
    SkillFire,
}

impl StringTable {
    pub const ALL: [StringTable; 12] = [
        StringTable::CardName,
        StringTable::CharaDescription,
        StringTable::CharaFriendship,
        StringTable::CharaWelcome,
        StringTable::CharaMeet,
        StringTable::CharaBattleStart,
        StringTable::CharaBattleEnd,
        StringTable::CharaFriendshipMax,
        StringTable::CharaBonds,
        StringTable::SkillName,
        StringTable::SkillDescription,
        StringTable::SkillFire,
    ];

    /// File name without the language suffix.
    pub fn stem(self) -> &'static str {
        match self {
            Self::CardName => "MsgCardName",
            Self::CharaDescription => "MsgCharaDesc",
            Self::CharaFriendship => "MsgCharaFriendship",
            Self::CharaWelcome => "MsgCharaWelcome",
            Self::CharaMeet => "MsgCharaMeet",
            Self::CharaBattleStart => "MsgCharaBtlStart",
            Self::CharaBattleEnd => "MsgCharaBtlEnd",
            Self::CharaFriendshipMax => "MsgCharaFriendshipMax",
            Self::CharaBonds => "MsgCharaBonds",
            Self::SkillName => "MsgSkillName",
            Self::SkillDescription => "MsgSkillDesc",
            Self::SkillFire => "MsgSkillFire",
        }
    }

    /// Field label used in validation errors and logs.
    pub fn field(self) -> &'static str {
        match self {
            Self::CardName => "Card names",
            Self::CharaDescription => "Character descriptions",
            Self::CharaFriendship => "Character friendship",
            Self::CharaWelcome => "Character login",
            Self::CharaMeet => "Character meet",
            Self::CharaBattleStart => "Character battle_start",
            Self::CharaBattleEnd => "Character battle_end",
            Self::CharaFriendshipMax => "Character friendship_max",
            Self::CharaBonds => "Character friendship_event",
            Self::SkillName => "Skill names",
            Self::SkillDescription => "Skill descriptions",
            Self::SkillFire => "Skill fire text",
        }
    }
}

/// Relative paths of every asset the loader reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    pub master_data: PathBuf,
    pub string_dir: PathBuf,
    pub lang_pack: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        AssetLayout {
            master_data: PathBuf::from(DEFAULT_MASTER_DATA_PATH),
            string_dir: PathBuf::from(DEFAULT_STRING_DIR),
            lang_pack: DEFAULT_LANG_PACK.to_string(),
        }
    }
}

impl AssetLayout {
    /// Default layout, with the language pack taken from `VC_GROUPER_LANG` when set and non-empty.
    pub fn from_env() -> Self {
        let mut layout = AssetLayout::default();
        if let Ok(lang) = std::env::var(LANG_PACK_ENV) {
            let lang = lang.trim();
            if !lang.is_empty() {
                layout.lang_pack = lang.to_string();
            }
        }
        layout
    }

    pub fn master_data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.master_data)
    }

    pub fn table_path(&self, root: &Path, table: StringTable) -> PathBuf {
        root.join(&self.string_dir)
            .join(format!("{}_{}.strb", table.stem(), self.lang_pack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_path_joins_stem_and_language() {
        let layout = AssetLayout::default();
        let path = layout.table_path(Path::new("/assets"), StringTable::CharaBonds);
        assert_eq!(path, Path::new("/assets/string/MsgCharaBonds_en.strb"));
    }

    #[test]
    fn every_table_has_a_distinct_file() {
        let layout = AssetLayout {
            lang_pack: "zhtw".to_string(),
            ..AssetLayout::default()
        };
        let mut paths: Vec<_> = StringTable::ALL
            .iter()
            .map(|table| layout.table_path(Path::new("root"), *table))
            .collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), StringTable::ALL.len());
        assert!(paths.iter().all(|p| p.to_string_lossy().ends_with("_zhtw.strb")));
    }
}
