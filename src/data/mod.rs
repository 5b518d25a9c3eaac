//! Master-data records, the decoder for the master document and the loaded repository.

pub mod amalgamation;
pub mod archwitch;
pub mod awaken;
pub mod card;
pub mod character;
pub mod deck_bonus;
pub mod master;
pub mod progression;
pub mod relic;
pub mod repository;
pub mod skill;
pub mod validate;

pub use amalgamation::Amalgamation;
pub use archwitch::{Archwitch, ArchwitchFriendship, ArchwitchSeries};
pub use awaken::CardAwaken;
pub use card::{Card, SkillSlot};
pub use character::CardCharacter;
pub use deck_bonus::{DeckBonus, DeckBonusCond};
pub use master::{decode_master_data, load_master_data, MasterData};
pub use progression::{FollowerKind, Level};
pub use relic::Relic;
pub use repository::Repository;
pub use skill::Skill;
pub use validate::{validate_references, ValidationDiagnostic, ValidationReport, ValidationSeverity};
