use alloc::sync::Arc;

use crate::ResizeMode;
use crate::feed::Feed;
use crate::overlay::DEFAULT_OVERLAY_DURATION_MS;

/// Invoked with the new mute value whenever a tap toggles sound.
pub type SetMutedCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Invoked with the item index when a video finishes (`on_end`) or loads (`on_load`).
pub type IndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired after the feed's state changes.
pub type OnChangeCallback<E> = Arc<dyn Fn(&Feed<E>) + Send + Sync>;

/// Who owns the mute flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MuteMode {
    /// The host owns the value. Taps only report the requested value through `set_muted`; the host
    /// echoes it back with `Feed::set_muted`.
    Controlled(bool),
    /// The feed owns the value, starting from the given state.
    Uncontrolled(bool),
}

impl MuteMode {
    pub fn initial(self) -> bool {
        match self {
            Self::Controlled(muted) | Self::Uncontrolled(muted) => muted,
        }
    }

    pub fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled(_))
    }
}

impl Default for MuteMode {
    fn default() -> Self {
        Self::Uncontrolled(false)
    }
}

/// Playback configuration forwarded verbatim to the video surface.
///
/// Fields the feed manages itself (source, paused, muted, repeat) are not part of this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoOptions {
    pub resize_mode: ResizeMode,
    pub progress_update_interval_ms: u64,
    pub play_in_background: bool,
    pub play_when_inactive: bool,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            resize_mode: ResizeMode::Cover,
            progress_update_interval_ms: 1000,
            play_in_background: false,
            play_when_inactive: false,
        }
    }
}

/// Gesture configuration forwarded to the press recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressOptions {
    /// Ignore all presses (taps, long presses, releases).
    pub disabled: bool,
    /// How long a press must be held before it counts as a long press.
    pub delay_long_press_ms: u64,
}

impl Default for PressOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            delay_long_press_ms: 500,
        }
    }
}

/// Configuration for [`crate::Feed`].
///
/// Callbacks are stored in `Arc`s so options stay cheap to clone and can be updated through
/// `Feed::update_options`.
pub struct FeedOptions<E = ()> {
    /// Number of items mounted ahead of the current one.
    pub preload: usize,
    pub mute: MuteMode,
    pub set_muted: Option<SetMutedCallback>,
    /// Start playing an item that is already current when it mounts.
    pub auto_play: bool,
    /// Scroll to the next item when a video ends (disables looping).
    pub go_to_next: bool,
    pub press: PressOptions,
    pub video: VideoOptions,
    /// Minimum share of an item (0..=100) that must be on screen for it to count as viewable.
    pub viewability_threshold_percent: u8,
    pub overlay_duration_ms: u64,
    pub on_end: Option<IndexCallback>,
    pub on_load: Option<IndexCallback>,
    pub on_change: Option<OnChangeCallback<E>>,
}

impl<E> Clone for FeedOptions<E> {
    fn clone(&self) -> Self {
        Self {
            preload: self.preload,
            mute: self.mute,
            set_muted: self.set_muted.clone(),
            auto_play: self.auto_play,
            go_to_next: self.go_to_next,
            press: self.press,
            video: self.video,
            viewability_threshold_percent: self.viewability_threshold_percent,
            overlay_duration_ms: self.overlay_duration_ms,
            on_end: self.on_end.clone(),
            on_load: self.on_load.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<E> Default for FeedOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FeedOptions<E> {
    pub fn new() -> Self {
        Self {
            preload: 10,
            mute: MuteMode::default(),
            set_muted: None,
            auto_play: true,
            go_to_next: false,
            press: PressOptions::default(),
            video: VideoOptions::default(),
            viewability_threshold_percent: 70,
            overlay_duration_ms: DEFAULT_OVERLAY_DURATION_MS,
            on_end: None,
            on_load: None,
            on_change: None,
        }
    }

    pub fn with_preload(mut self, preload: usize) -> Self {
        self.preload = preload;
        self
    }

    pub fn with_mute(mut self, mute: MuteMode) -> Self {
        self.mute = mute;
        self
    }

    pub fn with_set_muted(
        mut self,
        set_muted: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.set_muted = set_muted.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_go_to_next(mut self, go_to_next: bool) -> Self {
        self.go_to_next = go_to_next;
        self
    }

    pub fn with_press(mut self, press: PressOptions) -> Self {
        self.press = press;
        self
    }

    pub fn with_video(mut self, video: VideoOptions) -> Self {
        self.video = video;
        self
    }

    /// Values above 100 are clamped.
    pub fn with_viewability_threshold_percent(mut self, percent: u8) -> Self {
        self.viewability_threshold_percent = percent.min(100);
        self
    }

    pub fn with_overlay_duration_ms(mut self, duration_ms: u64) -> Self {
        self.overlay_duration_ms = duration_ms;
        self
    }

    pub fn with_on_end(mut self, on_end: Option<impl Fn(usize) + Send + Sync + 'static>) -> Self {
        self.on_end = on_end.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load(
        mut self,
        on_load: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_load = on_load.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Feed<E>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<E> core::fmt::Debug for FeedOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FeedOptions")
            .field("preload", &self.preload)
            .field("mute", &self.mute)
            .field("auto_play", &self.auto_play)
            .field("go_to_next", &self.go_to_next)
            .field("press", &self.press)
            .field("video", &self.video)
            .field(
                "viewability_threshold_percent",
                &self.viewability_threshold_percent,
            )
            .field("overlay_duration_ms", &self.overlay_duration_ms)
            .finish_non_exhaustive()
    }
}
