use std::sync::OnceLock;

/// Write-once cache for one resolved cross-reference (an index into the target collection).
///
/// Resolution is a pure function of the loaded data, so racing first resolvers may all
/// compute; the first store wins and every caller returns the stored value.
#[derive(Debug, Default, Clone)]
pub struct MemoSlot {
    cell: OnceLock<Option<usize>>,
}

impl MemoSlot {
    pub fn get_or_resolve(&self, resolve: impl FnOnce() -> Option<usize>) -> Option<usize> {
        if let Some(resolved) = self.cell.get() {
            return *resolved;
        }
        let resolved = resolve();
        let _ = self.cell.set(resolved);
        self.cell.get().copied().unwrap_or(resolved)
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}
