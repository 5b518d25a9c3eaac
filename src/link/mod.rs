//! Linking layer: positional text binding, id lookup, memoized cross-references,
//! label tables and skill-text templating.

pub mod binding;
pub mod labels;
pub mod lookup;
pub mod memo;
pub mod template;

pub use binding::{bind_lenient, bind_strict};
pub use lookup::{find_by_id, position_by_id, Identified, LookupStats};
pub use memo::MemoSlot;
pub use template::{render_skill_text, ProcCount};
