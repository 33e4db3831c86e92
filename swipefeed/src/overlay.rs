use crate::{SoundIcon, SoundIcons};

/// How long the sound overlay stays up after a mute change.
pub const DEFAULT_OVERLAY_DURATION_MS: u64 = 500;

/// A handle to the overlay's pending hide.
///
/// Handles are tagged with a generation; once a newer change re-arms the timer (or the overlay is
/// torn down), older handles no longer fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    pub generation: u64,
    pub deadline_ms: u64,
}

/// The result of arming the hide timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerChange {
    pub armed: TimerHandle,
    /// The pending hide that was replaced, if any. Hosts running their own timers should cancel it.
    pub cancelled: Option<TimerHandle>,
}

/// A transient "sound on/off" overlay that hides itself after a fixed delay.
///
/// The overlay does not own a clock. Drive it with `tick(now_ms)` from a frame loop, or schedule
/// a host timer for the returned handle and call `fire(handle)` when it elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MuteOverlay {
    duration_ms: u64,
    muted: bool,
    visible: bool,
    generation: u64,
    pending: Option<TimerHandle>,
}

impl Default for MuteOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_DURATION_MS)
    }
}

impl MuteOverlay {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            muted: false,
            visible: false,
            generation: 0,
            pending: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Takes effect on the next mute change.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The mute value the overlay was last shown for.
    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Shows the overlay for `muted` and (re)arms the hide timer.
    pub fn on_mute_changed(&mut self, muted: bool, now_ms: u64) -> TimerChange {
        self.muted = muted;
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        let armed = TimerHandle {
            generation: self.generation,
            deadline_ms: now_ms.saturating_add(self.duration_ms),
        };
        let cancelled = self.pending.replace(armed);
        ftrace!(
            muted,
            generation = armed.generation,
            deadline_ms = armed.deadline_ms,
            superseded = cancelled.is_some(),
            "MuteOverlay: armed"
        );
        TimerChange { armed, cancelled }
    }

    /// Hides the overlay once the pending deadline is reached. Returns `true` when it hid.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now_ms < pending.deadline_ms {
            return false;
        }
        self.hide();
        true
    }

    /// Fires a host-scheduled hide. Stale handles are ignored. Returns `true` when it hid.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            ftrace!(generation = handle.generation, "MuteOverlay: stale timer ignored");
            return false;
        }
        self.hide();
        true
    }

    /// Cancels any pending hide and removes the overlay.
    ///
    /// Returns the cancelled handle so a host timer can be released as well.
    pub fn teardown(&mut self) -> Option<TimerHandle> {
        self.visible = false;
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }

    fn hide(&mut self) {
        self.pending = None;
        self.visible = false;
    }

    /// The icon to draw, or `None` while hidden.
    pub fn icon(&self) -> Option<SoundIcon> {
        self.visible.then(|| SoundIcon::for_muted(self.muted))
    }

    /// Picks the host node for the current icon. Hidden overlays render nothing at all.
    pub fn render<'a, N>(&self, icons: &'a SoundIcons<N>) -> Option<&'a N> {
        self.icon().map(|icon| icons.get(icon))
    }
}
