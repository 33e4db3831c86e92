use crate::{PlayState, PlaybackState, ScrollRequest};

/// The per-item playback state machine.
///
/// An item plays while it is the current index and pauses once the list moves away. A long
/// press holds it paused regardless of the current index until the press is released. Taps are
/// mute toggles and never touch the play state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackController {
    index: usize,
    go_to_next: bool,
    state: PlayState,
    held: bool,
    seen_current: Option<usize>,
}

impl PlaybackController {
    /// Mounts a controller for `index`.
    ///
    /// It starts playing only when `auto_play` is set and the item is already current. This is the
    /// same rule `sync` applies, so an item mounted on arrival and one mounted ahead of time end
    /// up in the same state.
    pub fn mount(
        index: usize,
        current_index: Option<usize>,
        auto_play: bool,
        go_to_next: bool,
    ) -> Self {
        let state = if auto_play && current_index == Some(index) {
            PlayState::Playing
        } else {
            PlayState::Paused
        };
        ftrace!(index, ?current_index, auto_play, "PlaybackController::mount");
        Self {
            index,
            go_to_next,
            state,
            held: false,
            seen_current: current_index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_current(&self) -> bool {
        self.seen_current == Some(self.index)
    }

    /// Whether a long press currently holds the item paused.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// The effective play state, with a held press taking priority.
    pub fn state(&self) -> PlayState {
        if self.held {
            PlayState::Paused
        } else {
            self.state
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state().is_paused()
    }

    pub fn go_to_next(&self) -> bool {
        self.go_to_next
    }

    pub fn set_go_to_next(&mut self, go_to_next: bool) {
        self.go_to_next = go_to_next;
    }

    /// Looping and auto-advance are mutually exclusive.
    pub fn repeat(&self) -> bool {
        !self.go_to_next
    }

    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState {
            index: self.index,
            is_current: self.is_current(),
            is_paused: self.is_paused(),
        }
    }

    /// Re-evaluates against the shared current index.
    ///
    /// Only a change of the current index triggers a transition. Becoming current starts playback
    /// when `auto_play` is set; moving away always pauses. Returns `true` when the effective play
    /// state changed.
    pub fn sync(&mut self, current_index: Option<usize>, auto_play: bool) -> bool {
        if self.seen_current == current_index {
            return false;
        }
        let prev = self.state();
        self.seen_current = current_index;
        self.state = if auto_play && self.is_current() {
            PlayState::Playing
        } else {
            PlayState::Paused
        };
        prev != self.state()
    }

    /// Long-press down: pause and hold. Returns `true` if the item was playing.
    pub fn long_press(&mut self) -> bool {
        let was_playing = !self.is_paused();
        self.held = true;
        ftrace!(index = self.index, "PlaybackController: hold");
        was_playing
    }

    /// Press release. Resumes after a hold if the item is still current.
    ///
    /// Releases that do not follow a hold are ignored. Returns `true` if playback resumed.
    pub fn press_out(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.state = if self.is_current() {
            PlayState::Playing
        } else {
            PlayState::Paused
        };
        !self.state.is_paused()
    }

    /// A short press: returns the mute value the host should switch to.
    pub fn tap(&self, muted: bool) -> bool {
        !muted
    }

    /// Decides what happens when playback reaches the end.
    ///
    /// With auto-advance enabled this requests an animated scroll to the following item. The last
    /// item has nowhere to advance to and yields `None`.
    pub fn on_end(&self, count: usize) -> Option<ScrollRequest> {
        if !self.go_to_next {
            return None;
        }
        let next = self.index.saturating_add(1);
        if next >= count {
            fdebug!(index = self.index, count, "PlaybackController: end of feed");
            return None;
        }
        Some(ScrollRequest {
            index: next,
            animated: true,
        })
    }
}
