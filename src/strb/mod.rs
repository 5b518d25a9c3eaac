//! STRB: the game's binary localized-text tables.
//!
//! A table is an 8-byte header, an opaque binary block of zero-delimited chunks, the
//! `null\0` sentinel, then one zero-terminated text record per entry.

mod filter;
mod reader;

pub use filter::{normalize, space_slashes};
pub use reader::{read_string_table, StringTableReader, HEADER_LEN, SENTINEL};
