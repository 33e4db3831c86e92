use alloc::string::String;

/// A single video in the feed.
///
/// Items are immutable once handed to the feed; their order defines the swipe order and the
/// "next" target for auto-advance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedItem<E = ()> {
    pub video_url: String,
    /// Opaque host data carried alongside the video (captions, author, etc).
    pub extra_data: Option<E>,
}

impl FeedItem {
    /// An item without host data. Attach some with `with_extra_data`.
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            extra_data: None,
        }
    }
}

impl<E> FeedItem<E> {
    /// Replaces the host data, changing its type if needed.
    pub fn with_extra_data<F>(self, extra_data: F) -> FeedItem<F> {
        FeedItem {
            video_url: self.video_url,
            extra_data: Some(extra_data),
        }
    }

    /// An item of any data type with no data attached.
    pub fn without_extra_data(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            extra_data: None,
        }
    }
}

/// One entry of a "viewable items changed" batch reported by the list.
///
/// `index` is `None` when the list could not attribute the entry to a position; such entries are
/// treated as index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewToken {
    pub index: Option<usize>,
}

impl ViewToken {
    pub fn new(index: usize) -> Self {
        Self { index: Some(index) }
    }

    pub fn index_or_default(&self) -> usize {
        self.index.unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayState {
    Playing,
    #[default]
    Paused,
}

impl PlayState {
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
}

/// A per-item view of the playback decision, as the host should render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackState {
    pub index: usize,
    pub is_current: bool,
    pub is_paused: bool,
}

/// Which sound icon the mute overlay shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundIcon {
    SoundOn,
    SoundOff,
}

impl SoundIcon {
    pub fn for_muted(muted: bool) -> Self {
        if muted { Self::SoundOff } else { Self::SoundOn }
    }
}

/// Host-supplied overlay content, one node per sound state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundIcons<N> {
    pub sound_on: N,
    pub sound_off: N,
}

impl<N> SoundIcons<N> {
    pub fn new(sound_on: N, sound_off: N) -> Self {
        Self {
            sound_on,
            sound_off,
        }
    }

    pub fn get(&self, icon: SoundIcon) -> &N {
        match icon {
            SoundIcon::SoundOn => &self.sound_on,
            SoundIcon::SoundOff => &self.sound_off,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    None,
}

/// A scroll command issued to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub index: usize,
    pub animated: bool,
}

/// Items a host should keep mounted (exclusive end).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl RenderRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}
