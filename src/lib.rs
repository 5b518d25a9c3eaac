//! Load-and-link engine for an extracted Valkyrie Crusade asset bundle.
//!
//! [`Repository::load`] decodes the JSON master document, reads the binary string tables,
//! binds their text onto the record collections by position and hands back a read-only
//! repository whose cross-references resolve lazily.

pub mod config;
pub mod data;
pub mod error;
pub mod link;
pub mod strb;

pub use config::{AssetLayout, StringTable};
pub use data::repository::Repository;
pub use error::LoadError;
