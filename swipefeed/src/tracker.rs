use crate::{FeedStore, ViewToken};

/// Derives the current index from the list's "viewable items changed" batches.
///
/// The first entry of a batch wins. Empty batches keep the previous index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityTracker {
    batches: u64,
    empty_batches: u64,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primary index of a batch, or `None` for an empty batch.
    pub fn primary_index(tokens: &[ViewToken]) -> Option<usize> {
        tokens.first().map(ViewToken::index_or_default)
    }

    /// Applies a batch to the store. Returns `true` when the current index changed.
    pub fn on_viewable_items_changed(
        &mut self,
        store: &mut FeedStore,
        tokens: &[ViewToken],
    ) -> bool {
        self.batches = self.batches.saturating_add(1);
        let Some(index) = Self::primary_index(tokens) else {
            self.empty_batches = self.empty_batches.saturating_add(1);
            ftrace!("VisibilityTracker: empty batch, keeping current index");
            return false;
        };
        if tokens[0].index.is_none() {
            fwarn!("VisibilityTracker: viewable entry without index, using 0");
        }
        let changed = store.set_current_index(Some(index));
        if changed {
            fdebug!(index, "VisibilityTracker: current index changed");
        }
        changed
    }

    /// Number of batches observed (including empty ones).
    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn empty_batches(&self) -> u64 {
        self.empty_batches
    }
}
