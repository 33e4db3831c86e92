//! A headless playback engine for vertically swiped short-video feeds.
//!
//! For adapter-level utilities (paging, viewability, scroll tweens), see the `swipefeed-adapter`
//! crate.
//!
//! The crate decides, for a list of videos, which single item plays, when the transient sound
//! overlay is shown, and when auto-advance fires:
//! - a visibility tracker turns the list's "viewable items changed" batches into a current index
//! - a per-item playback controller pauses everything that is not current
//! - a mute overlay timer shows a sound icon after every mute change and hides it again
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - visibility batches from its paged list, and a way to scroll it (`ListCommands`)
//! - gesture events (tap, long press, release) and video end/load events
//! - a clock, via `Feed::tick(now_ms)` or its own timers (`Feed::fire_overlay_timer`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod feed;
mod options;
mod overlay;
mod playback;
mod state;
mod store;
mod surface;
mod tracker;
mod types;


pub use feed::Feed;
pub use options::{
    FeedOptions, IndexCallback, MuteMode, OnChangeCallback, PressOptions, SetMutedCallback,
    VideoOptions,
};
pub use overlay::{DEFAULT_OVERLAY_DURATION_MS, MuteOverlay, TimerChange, TimerHandle};
pub use playback::PlaybackController;
pub use state::FeedSnapshot;
pub use store::FeedStore;
pub use surface::{ListCommands, VideoSurfaceProps};
pub use tracker::VisibilityTracker;
pub use types::{
    FeedItem, PlayState, PlaybackState, RenderRange, ResizeMode, ScrollRequest, SoundIcon,
    SoundIcons, ViewToken,
};
