//! Adapter utilities for the `swipefeed` crate.
//!
//! The `swipefeed` crate is UI-agnostic and only decides playback state. This crate provides
//! small, framework-neutral helpers for hosts that do not have a native paged list:
//!
//! - Viewability over equally sized pages (coverage threshold)
//! - A snap-to-page pager with tween-driven animated scrolling
//! - A driver that wires a feed, a pager and a millisecond clock together
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod pager;
mod tween;
mod viewability;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use pager::Pager;
pub use tween::{DEFAULT_SCROLL_DURATION_MS, Easing, Tween};
pub use viewability::Viewability;
