//! Id lookup over record collections.
//!
//! Ids are expected to be 1-based and contiguous, so `id - 1` is tried as an index
//! first. Gaps or reordering (removed or renumbered content) fall back to a linear scan.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::data::{
    Amalgamation, Archwitch, ArchwitchFriendship, ArchwitchSeries, Card, CardAwaken,
    CardCharacter, DeckBonus, DeckBonusCond, FollowerKind, Level, Relic, Skill,
};

/// A record carrying its own `_id`.
pub trait Identified {
    fn id(&self) -> i32;
}

/// Counts which lookup path served each resolved id.
#[derive(Debug, Default)]
pub struct LookupStats {
    fast_hits: AtomicU64,
    fallback_scans: AtomicU64,
}

impl LookupStats {
    pub fn fast_hits(&self) -> u64 {
        self.fast_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_scans(&self) -> u64 {
        self.fallback_scans.load(Ordering::Relaxed)
    }

    /// Total lookups that reached either path (ids <= 0 are not counted).
    pub fn searches(&self) -> u64 {
        self.fast_hits() + self.fallback_scans()
    }
}

/// Position of the record with `id`, or `None` when `id <= 0` or no record matches.
/// On duplicate ids the direct index wins if it matches, otherwise the first match.
pub fn position_by_id<T: Identified>(items: &[T], id: i32, stats: &LookupStats) -> Option<usize> {
    if id <= 0 {
        return None;
    }
    let index = (id - 1) as usize;
    if items.get(index).is_some_and(|item| item.id() == id) {
        stats.fast_hits.fetch_add(1, Ordering::Relaxed);
        return Some(index);
    }
    stats.fallback_scans.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(id, len = items.len(), "id is not at its expected position; scanning");
    items.iter().position(|item| item.id() == id)
}

/// Record with `id`, see [`position_by_id`].
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: i32, stats: &LookupStats) -> Option<&'a T> {
    position_by_id(items, id, stats).and_then(|index| items.get(index))
}

/// Index of the first record whose id breaks the `position + 1` pattern.
pub fn first_gap<T: Identified>(items: &[T]) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .position(|(index, item)| i64::from(item.id()) != index as i64 + 1)
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i32 {
                self.id
            }
        })+
    };
}

impl_identified!(
    Card,
    Skill,
    CardCharacter,
    Amalgamation,
    CardAwaken,
    FollowerKind,
    Archwitch,
    ArchwitchSeries,
    ArchwitchFriendship,
    Relic,
    Level,
    DeckBonus,
    DeckBonusCond,
);
