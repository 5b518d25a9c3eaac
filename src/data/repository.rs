//! The loaded, cross-referenced game data.
//! Load once, then share by reference (or behind an `Arc`) with every consumer.

use std::path::Path;

use crate::config::{AssetLayout, StringTable};
use crate::data::master::{load_master_data, MasterData};
use crate::data::{
    Amalgamation, Archwitch, ArchwitchFriendship, ArchwitchSeries, Card, CardAwaken,
    CardCharacter, DeckBonus, DeckBonusCond, FollowerKind, Level, Relic, Skill, SkillSlot,
};
use crate::error::LoadError;
use crate::link::{bind_lenient, bind_strict, find_by_id, position_by_id, LookupStats};
use crate::strb::{read_string_table, space_slashes};

/// Read-only repository over every record collection.
///
/// Stored foreign keys on cards (character and skills) resolve lazily and are memoized on
/// the card. Reverse and one-to-many relations are recomputed by scanning on each call.
#[derive(Debug)]
pub struct Repository {
    data: MasterData,
    stats: LookupStats,
}

impl Repository {
    /// Load from an extracted asset root using the default layout (language pack from
    /// `VC_GROUPER_LANG`, falling back to `en`).
    pub fn load(root: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(root, &AssetLayout::from_env())
    }

    /// Load with an explicit layout. Any failure discards everything read so far.
    pub fn load_with(root: impl AsRef<Path>, layout: &AssetLayout) -> Result<Self, LoadError> {
        let root = root.as_ref();
        let mut data = load_master_data(layout.master_data_path(root))?;
        let read = |table: StringTable| read_string_table(layout.table_path(root, table));

        bind_strict(
            &mut data.cards,
            read(StringTable::CardName)?,
            StringTable::CardName.field(),
            |card, name| card.name = title_case(&name),
        )?;

        let characters = &mut data.characters;
        bind_strict(
            characters,
            read(StringTable::CharaDescription)?,
            StringTable::CharaDescription.field(),
            |chara, text| chara.description = text.replace("<br />", " "),
        )?;
        bind_strict(
            characters,
            read(StringTable::CharaFriendship)?,
            StringTable::CharaFriendship.field(),
            |chara, text| chara.friendship = text,
        )?;
        // Login is the one character table without a length check.
        bind_lenient(
            characters,
            read(StringTable::CharaWelcome)?,
            StringTable::CharaWelcome.field(),
            |chara, text| chara.login = text,
        );
        bind_strict(
            characters,
            read(StringTable::CharaMeet)?,
            StringTable::CharaMeet.field(),
            |chara, text| chara.meet = text,
        )?;
        bind_strict(
            characters,
            read(StringTable::CharaBattleStart)?,
            StringTable::CharaBattleStart.field(),
            |chara, text| chara.battle_start = text,
        )?;
        bind_strict(
            characters,
            read(StringTable::CharaBattleEnd)?,
            StringTable::CharaBattleEnd.field(),
            |chara, text| chara.battle_end = text,
        )?;
        bind_strict(
            characters,
            read(StringTable::CharaFriendshipMax)?,
            StringTable::CharaFriendshipMax.field(),
            |chara, text| chara.friendship_max = text,
        )?;
        bind_strict(
            characters,
            read(StringTable::CharaBonds)?,
            StringTable::CharaBonds.field(),
            |chara, text| chara.friendship_event = text,
        )?;

        let skills = &mut data.skills;
        bind_lenient(
            skills,
            read(StringTable::SkillName)?,
            StringTable::SkillName.field(),
            |skill, text| skill.name = text,
        );
        bind_lenient(
            skills,
            read(StringTable::SkillDescription)?,
            StringTable::SkillDescription.field(),
            |skill, text| skill.description = space_slashes(&text),
        );
        bind_lenient(
            skills,
            read(StringTable::SkillFire)?,
            StringTable::SkillFire.field(),
            |skill, text| skill.fire = text,
        );

        tracing::info!(
            root = %root.display(),
            lang = %layout.lang_pack,
            cards = data.cards.len(),
            skills = data.skills.len(),
            characters = data.characters.len(),
            amalgamations = data.amalgamations.len(),
            archwitches = data.archwitches.len(),
            "loaded master data and string tables"
        );
        Ok(Self::from_master(data))
    }

    /// Wrap already decoded (and possibly already bound) collections.
    pub fn from_master(data: MasterData) -> Self {
        Repository {
            data,
            stats: LookupStats::default(),
        }
    }

    pub fn master(&self) -> &MasterData {
        &self.data
    }

    /// Document version, when the master document carries one.
    pub fn version(&self) -> Option<i64> {
        self.data.version
    }

    /// Which lookup path served the id resolutions made through this repository.
    pub fn lookup_stats(&self) -> &LookupStats {
        &self.stats
    }

    pub fn cards(&self) -> &[Card] {
        &self.data.cards
    }

    pub fn skills(&self) -> &[Skill] {
        &self.data.skills
    }

    pub fn characters(&self) -> &[CardCharacter] {
        &self.data.characters
    }

    pub fn amalgamations(&self) -> &[Amalgamation] {
        &self.data.amalgamations
    }

    pub fn awakenings(&self) -> &[CardAwaken] {
        &self.data.awakenings
    }

    pub fn rebirths(&self) -> &[CardAwaken] {
        &self.data.rebirths
    }

    pub fn follower_kinds(&self) -> &[FollowerKind] {
        &self.data.follower_kinds
    }

    pub fn archwitches(&self) -> &[Archwitch] {
        &self.data.archwitches
    }

    pub fn archwitch_series(&self) -> &[ArchwitchSeries] {
        &self.data.archwitch_series
    }

    pub fn archwitch_friendships(&self) -> &[ArchwitchFriendship] {
        &self.data.archwitch_friendships
    }

    pub fn relics(&self) -> &[Relic] {
        &self.data.relics
    }

    pub fn levels(&self) -> &[Level] {
        &self.data.levels
    }

    pub fn deck_bonuses(&self) -> &[DeckBonus] {
        &self.data.deck_bonuses
    }

    pub fn deck_bonus_conditions(&self) -> &[DeckBonusCond] {
        &self.data.deck_bonus_conditions
    }

    pub fn card(&self, id: i32) -> Option<&Card> {
        find_by_id(&self.data.cards, id, &self.stats)
    }

    pub fn skill(&self, id: i32) -> Option<&Skill> {
        find_by_id(&self.data.skills, id, &self.stats)
    }

    pub fn character(&self, id: i32) -> Option<&CardCharacter> {
        find_by_id(&self.data.characters, id, &self.stats)
    }

    pub fn amalgamation(&self, id: i32) -> Option<&Amalgamation> {
        find_by_id(&self.data.amalgamations, id, &self.stats)
    }

    pub fn follower_kind(&self, id: i32) -> Option<&FollowerKind> {
        find_by_id(&self.data.follower_kinds, id, &self.stats)
    }

    pub fn archwitch(&self, id: i32) -> Option<&Archwitch> {
        find_by_id(&self.data.archwitches, id, &self.stats)
    }

    pub fn archwitch_series_by_id(&self, id: i32) -> Option<&ArchwitchSeries> {
        find_by_id(&self.data.archwitch_series, id, &self.stats)
    }

    pub fn relic(&self, id: i32) -> Option<&Relic> {
        find_by_id(&self.data.relics, id, &self.stats)
    }

    pub fn level(&self, id: i32) -> Option<&Level> {
        find_by_id(&self.data.levels, id, &self.stats)
    }

    pub fn deck_bonus(&self, id: i32) -> Option<&DeckBonus> {
        find_by_id(&self.data.deck_bonuses, id, &self.stats)
    }

    /// Character of `card`, memoized on the card. `card` must belong to this repository.
    pub fn card_character(&self, card: &Card) -> Option<&CardCharacter> {
        debug_assert!(self.owns(card), "card {} is not from this repository", card.id);
        let characters = &self.data.characters;
        card.links
            .character
            .get_or_resolve(|| position_by_id(characters, card.card_chara_id, &self.stats))
            .and_then(|index| characters.get(index))
    }

    /// Skill in `slot` of `card`, memoized on the card. `card` must belong to this repository.
    pub fn card_skill(&self, card: &Card, slot: SkillSlot) -> Option<&Skill> {
        debug_assert!(self.owns(card), "card {} is not from this repository", card.id);
        let skills = &self.data.skills;
        card.links.skills[slot.index()]
            .get_or_resolve(|| position_by_id(skills, card.skill_id(slot), &self.stats))
            .and_then(|index| skills.get(index))
    }

    /// `card` is stored in this repository's card table.
    fn owns(&self, card: &Card) -> bool {
        self.data
            .cards
            .as_ptr_range()
            .contains(&(card as *const Card))
    }

    pub fn card_follower_kind(&self, card: &Card) -> Option<&FollowerKind> {
        self.follower_kind(card.follower_kind_id)
    }

    /// Card produced when `card` suffers an evolution accident.
    pub fn evo_accident(&self, card: &Card) -> Option<&Card> {
        self.card(card.trans_card_id)
    }

    /// The other card whose evolution accident produces `card`.
    pub fn evo_accident_of(&self, card: &Card) -> Option<&Card> {
        if card.id <= 0 {
            return None;
        }
        self.data
            .cards
            .iter()
            .find(|other| other.trans_card_id == card.id && other.id != card.id)
    }

    /// Every amalgamation using `card` as a material or producing it.
    pub fn amalgamations_of(&self, card: &Card) -> Vec<&Amalgamation> {
        self.data
            .amalgamations
            .iter()
            .filter(|recipe| recipe.involves(card.id))
            .collect()
    }

    /// `card` is the result of some amalgamation.
    pub fn is_amalgamation(&self, card: &Card) -> bool {
        self.data.amalgamations.iter().any(|recipe| recipe.produces(card.id))
    }

    /// `card` is a material in some amalgamation.
    pub fn has_amalgamation(&self, card: &Card) -> bool {
        self.data
            .amalgamations
            .iter()
            .any(|recipe| recipe.uses_material(card.id))
    }

    /// Material cards of `recipe`, skipping references that do not resolve.
    pub fn amalgamation_materials(&self, recipe: &Amalgamation) -> Vec<&Card> {
        recipe.materials().filter_map(|id| self.card(id)).collect()
    }

    pub fn amalgamation_result(&self, recipe: &Amalgamation) -> Option<&Card> {
        self.card(recipe.fusion_card_id)
    }

    pub fn awakens_to(&self, card: &Card) -> Option<&Card> {
        self.recipe_target(&self.data.awakenings, card)
    }

    pub fn awakens_from(&self, card: &Card) -> Option<&Card> {
        self.recipe_source(&self.data.awakenings, card)
    }

    pub fn has_rebirth(&self, card: &Card) -> bool {
        self.data
            .rebirths
            .iter()
            .any(|recipe| recipe.is_open() && recipe.base_card_id == card.id)
    }

    pub fn rebirths_to(&self, card: &Card) -> Option<&Card> {
        self.recipe_target(&self.data.rebirths, card)
    }

    pub fn rebirths_from(&self, card: &Card) -> Option<&Card> {
        self.recipe_source(&self.data.rebirths, card)
    }

    fn recipe_target(&self, recipes: &[CardAwaken], card: &Card) -> Option<&Card> {
        recipes
            .iter()
            .find(|recipe| recipe.is_open() && recipe.base_card_id == card.id)
            .and_then(|recipe| self.card(recipe.result_card_id))
    }

    fn recipe_source(&self, recipes: &[CardAwaken], card: &Card) -> Option<&Card> {
        recipes
            .iter()
            .find(|recipe| recipe.is_open() && recipe.result_card_id == card.id)
            .and_then(|recipe| self.card(recipe.base_card_id))
    }

    /// Next evolution stage of the same character. Awakened (`H*`) cards, cross-character
    /// targets and self references have none.
    pub fn next_evolution(&self, card: &Card) -> Option<&Card> {
        if card.card_chara_id <= 0
            || card.evolution_card_id <= 0
            || card.evolution_card_id == card.id
            || card.rarity().starts_with('H')
        {
            return None;
        }
        self.card(card.evolution_card_id)
            .filter(|next| next.card_chara_id == card.card_chara_id && next.id != card.id)
    }

    /// Previous evolution stage of the same character.
    pub fn previous_evolution(&self, card: &Card) -> Option<&Card> {
        if card.card_chara_id <= 0 || card.evolution_rank <= 0 {
            return None;
        }
        self.data
            .cards
            .iter()
            .filter(|prev| {
                prev.card_chara_id == card.card_chara_id
                    && prev.evolution_card_id == card.id
                    && prev.id != card.id
            })
            .last()
    }

    /// Every evolution stage of `card`, first to last, excluding awakening and amalgamation.
    pub fn evolution_chain<'a>(&'a self, card: &'a Card) -> Vec<&'a Card> {
        let limit = self.data.cards.len();
        let mut first = card;
        for _ in 0..limit {
            match self.previous_evolution(first) {
                Some(prev) => first = prev,
                None => break,
            }
        }

        let mut chain = vec![first];
        let mut current = first;
        while chain.len() <= limit {
            match self.next_evolution(current) {
                Some(next) if !chain.iter().any(|seen| seen.id == next.id) => {
                    chain.push(next);
                    current = next;
                }
                _ => break,
            }
        }
        chain
    }

    /// Every card of a character, in collection order.
    pub fn character_cards(&self, character_id: i32) -> Vec<&Card> {
        if character_id <= 0 {
            return Vec::new();
        }
        self.data
            .cards
            .iter()
            .filter(|card| card.card_chara_id == character_id)
            .collect()
    }

    /// Archwitch records that use `card`, ordered by series then id.
    pub fn card_archwitches(&self, card: &Card) -> Vec<&Archwitch> {
        let mut found: Vec<&Archwitch> = self
            .data
            .archwitches
            .iter()
            .filter(|aw| card.id > 0 && aw.card_master_id == card.id)
            .collect();
        found.sort_by_key(|aw| (aw.king_series_id, aw.id));
        found.dedup_by_key(|aw| aw.id);
        found
    }

    pub fn archwitch_series_of(&self, archwitch: &Archwitch) -> Option<&ArchwitchSeries> {
        self.archwitch_series_by_id(archwitch.king_series_id)
    }

    /// Friendship rates recorded for an archwitch.
    pub fn archwitch_likeability(&self, archwitch: &Archwitch) -> Vec<&ArchwitchFriendship> {
        self.data
            .archwitch_friendships
            .iter()
            .filter(|rate| rate.king_id == archwitch.id)
            .collect()
    }

    pub fn deck_bonus_conditions_of(&self, bonus: &DeckBonus) -> Vec<&DeckBonusCond> {
        self.data
            .deck_bonus_conditions
            .iter()
            .filter(|cond| cond.deck_bonus_id == bonus.id)
            .collect()
    }

    /// Cards whose name matches `name`, ignoring case and spacing. Evolutions of one card
    /// usually share a name, so several may match.
    pub fn cards_named(&self, name: &str) -> Vec<&Card> {
        let wanted = normalize_lookup(name);
        if wanted.is_empty() {
            return Vec::new();
        }
        self.data
            .cards
            .iter()
            .filter(|card| normalize_lookup(&card.name) == wanted)
            .collect()
    }

    /// First card using image number `card_no`.
    pub fn card_by_image(&self, card_no: i32) -> Option<&Card> {
        self.data.cards.iter().find(|card| card.card_no == card_no)
    }
}

fn normalize_lookup(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '_' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Lowercase, then capitalize the first letter of each word. ASCII punctuation separates
/// words; outside ASCII only whitespace does.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = if ch.is_ascii() {
            !(ch.is_ascii_alphanumeric() || ch == '_')
        } else {
            ch.is_whitespace()
        };
    }
    out
}
