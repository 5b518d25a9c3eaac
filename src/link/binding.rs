//! Positional binding of string tables onto record collections: entry `i` of the table
//! belongs to record `i` of the collection.

use crate::error::LoadError;

/// Bind every entry, requiring the table and the collection to be the same length.
/// Nothing is assigned when the lengths differ.
pub fn bind_strict<T>(
    records: &mut [T],
    texts: Vec<String>,
    field: &'static str,
    mut assign: impl FnMut(&mut T, String),
) -> Result<(), LoadError> {
    if records.len() != texts.len() {
        return Err(LoadError::Validation {
            field,
            master: records.len(),
            strings: texts.len(),
        });
    }
    for (record, text) in records.iter_mut().zip(texts) {
        assign(record, text);
    }
    Ok(())
}

/// Bind up to the shorter of the two lengths. Records past the end of the table keep
/// their empty text; surplus table entries are ignored.
pub fn bind_lenient<T>(
    records: &mut [T],
    texts: Vec<String>,
    field: &'static str,
    mut assign: impl FnMut(&mut T, String),
) {
    if texts.len() != records.len() {
        tracing::debug!(
            field,
            master = records.len(),
            strings = texts.len(),
            "string table length differs from collection; binding the overlap only"
        );
    }
    for (record, text) in records.iter_mut().zip(texts) {
        assign(record, text);
    }
}
