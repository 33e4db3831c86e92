/// The shared state every rendered item reads: which index is current and whether sound is off.
///
/// The feed owns exactly one store and hands it out by reference. Each accepted event bumps
/// `revision` once, after which dependents are re-evaluated from the new values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedStore {
    current_index: Option<usize>,
    muted: bool,
    revision: u64,
}

impl FeedStore {
    pub fn new(muted: bool) -> Self {
        Self {
            current_index: None,
            muted,
            revision: 0,
        }
    }

    /// The index reported by the most recent non-empty visibility batch, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Same as `current_index`, but reads an unreported index as 0.
    pub fn current_index_or_default(&self) -> usize {
        self.current_index.unwrap_or(0)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_index == Some(index)
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the value changed.
    pub fn set_current_index(&mut self, index: Option<usize>) -> bool {
        if self.current_index == index {
            return false;
        }
        self.current_index = index;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Returns `true` if the value changed.
    pub fn set_muted(&mut self, muted: bool) -> bool {
        if self.muted == muted {
            return false;
        }
        self.muted = muted;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}
