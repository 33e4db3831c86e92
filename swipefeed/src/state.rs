/// A lightweight, serializable snapshot of the feed's shared state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Per-item holds and
/// pending timers are deliberately not captured; they do not survive a restore.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedSnapshot {
    pub current_index: Option<usize>,
    pub muted: bool,
    /// Informational only. `Feed::restore` does not apply it.
    pub overlay_visible: bool,
}
