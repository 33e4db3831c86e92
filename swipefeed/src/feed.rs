use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{
    FeedItem, FeedOptions, FeedSnapshot, FeedStore, ListCommands, MuteMode, MuteOverlay,
    PlaybackController, PlaybackState, RenderRange, ScrollRequest, SoundIcon, SoundIcons,
    TimerChange, TimerHandle, VideoSurfaceProps, ViewToken, VisibilityTracker,
};

/// A headless swipe-to-play video feed.
///
/// This type holds no UI objects:
/// - The host's list reports visibility with `on_viewable_items_changed`.
/// - Gestures arrive as `tap` / `long_press` / `press_out`.
/// - Video surfaces report `on_video_load` / `on_video_end`.
/// - `tick(now_ms)` (or `fire_overlay_timer`) retires the sound overlay.
///
/// Rendering reads back `render_range`, `surface_props` and `render_overlay`.
///
/// ```
/// use swipefeed::{Feed, FeedItem, FeedOptions, ScrollRequest, ViewToken};
///
/// let mut feed = Feed::new(
///     vec![FeedItem::new("a.mp4"), FeedItem::new("b.mp4")],
///     FeedOptions::new().with_go_to_next(true),
///     0,
/// );
/// feed.on_viewable_items_changed(&[ViewToken::new(0)]);
/// assert!(!feed.playback_state(0).unwrap().is_paused);
///
/// let mut list: Vec<ScrollRequest> = Vec::new();
/// feed.on_video_end(0, &mut list);
/// assert_eq!(list[0].index, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Feed<E = ()> {
    items: Vec<FeedItem<E>>,
    options: FeedOptions<E>,
    store: FeedStore,
    tracker: VisibilityTracker,
    controllers: Vec<Option<PlaybackController>>,
    mounted: RenderRange,
    overlay: MuteOverlay,
    /// The current index has moved from one item to another at least once.
    swiped: bool,
    torn_down: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<E> Feed<E> {
    /// Creates a feed and mounts the initial render window.
    ///
    /// Mounting counts as a mute change, so the overlay starts visible and hides after
    /// `overlay_duration_ms`. Hosts that schedule the hide with their own timers read the armed
    /// handle from `overlay_timer()`.
    pub fn new(items: Vec<FeedItem<E>>, options: FeedOptions<E>, now_ms: u64) -> Self {
        let muted = options.mute.initial();
        let mut overlay = MuteOverlay::new(options.overlay_duration_ms);
        overlay.on_mute_changed(muted, now_ms);
        fdebug!(
            count = items.len(),
            preload = options.preload,
            auto_play = options.auto_play,
            go_to_next = options.go_to_next,
            "Feed::new"
        );
        let mut feed = Self {
            controllers: vec![None; items.len()],
            items,
            options,
            store: FeedStore::new(muted),
            tracker: VisibilityTracker::new(),
            mounted: RenderRange {
                start_index: 0,
                end_index: 0,
            },
            overlay,
            swiped: false,
            torn_down: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        feed.sync_controllers();
        feed
    }

    pub fn options(&self) -> &FeedOptions<E> {
        &self.options
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    pub fn overlay(&self) -> &MuteOverlay {
        &self.overlay
    }

    pub fn items(&self) -> &[FeedItem<E>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&FeedItem<E>> {
        self.items.get(index)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.store.current_index()
    }

    pub fn muted(&self) -> bool {
        self.store.muted()
    }

    /// The pending overlay hide, if one is armed.
    pub fn overlay_timer(&self) -> Option<TimerHandle> {
        self.overlay.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn is_live(&self) -> bool {
        if self.torn_down {
            fwarn!("Feed: event after teardown");
        }
        !self.torn_down
    }

    /// Whether an item that becomes current starts playing.
    ///
    /// Without `auto_play` the item presented by the first visibility event stays paused; every
    /// item reached by swiping plays.
    fn plays_when_current(&self) -> bool {
        self.options.auto_play || self.swiped
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// The items a host should keep mounted: one page behind the current item, the current item,
    /// and `preload` pages ahead.
    pub fn render_range(&self) -> RenderRange {
        let count = self.items.len();
        if count == 0 {
            return RenderRange {
                start_index: 0,
                end_index: 0,
            };
        }
        let current = self.store.current_index_or_default().min(count - 1);
        RenderRange {
            start_index: current.saturating_sub(1),
            end_index: current
                .saturating_add(1)
                .saturating_add(self.options.preload)
                .min(count),
        }
    }

    /// Mounts/unmounts controllers for the render window and re-evaluates the mounted ones.
    fn sync_controllers(&mut self) {
        let next = self.render_range();
        let prev = self.mounted;
        let current = self.store.current_index();
        let auto_play = self.plays_when_current();
        let go_to_next = self.options.go_to_next;

        let (start, end) = if prev.is_empty() {
            (next.start_index, next.end_index)
        } else {
            (
                prev.start_index.min(next.start_index),
                prev.end_index.max(next.end_index),
            )
        };

        for index in start..end.min(self.controllers.len()) {
            let slot = &mut self.controllers[index];
            if !next.contains(index) {
                if slot.take().is_some() {
                    ftrace!(index, "Feed: unmount");
                }
                continue;
            }
            if let Some(controller) = slot.as_mut() {
                controller.sync(current, auto_play);
            } else {
                *slot = Some(PlaybackController::mount(
                    index, current, auto_play, go_to_next,
                ));
            }
        }
        self.mounted = next;
    }

    /// The mounted controller for `index`, if any.
    pub fn controller(&self, index: usize) -> Option<&PlaybackController> {
        self.controllers.get(index)?.as_ref()
    }

    fn controller_mut(&mut self, index: usize) -> Option<&mut PlaybackController> {
        let controller = self.controllers.get_mut(index)?.as_mut();
        if controller.is_none() {
            fwarn!(index, "Feed: event for an unmounted item");
        }
        controller
    }

    /// Applies a "viewable items changed" batch. Returns `true` when the current index changed.
    pub fn on_viewable_items_changed(&mut self, tokens: &[ViewToken]) -> bool {
        if !self.is_live() {
            return false;
        }
        let prev = self.store.current_index();
        if !self
            .tracker
            .on_viewable_items_changed(&mut self.store, tokens)
        {
            return false;
        }
        if prev.is_some() {
            self.swiped = true;
        }
        self.sync_controllers();
        ftrace!(
            current = ?self.store.current_index(),
            "Feed::on_viewable_items_changed"
        );
        self.notify();
        true
    }

    /// Applies a mute value coming from the host (a controlled prop change or an external
    /// toggle).
    ///
    /// Returns the overlay timer change when the value actually changed.
    pub fn set_muted(&mut self, muted: bool, now_ms: u64) -> Option<TimerChange> {
        if !self.is_live() {
            return None;
        }
        if let MuteMode::Controlled(value) = &mut self.options.mute {
            *value = muted;
        }
        if !self.store.set_muted(muted) {
            return None;
        }
        let change = self.overlay.on_mute_changed(muted, now_ms);
        fdebug!(muted, "Feed: mute changed");
        self.notify();
        Some(change)
    }

    /// A short press on `index`: toggles sound.
    ///
    /// The new value goes to the `set_muted` callback. Uncontrolled feeds apply it right away;
    /// controlled feeds wait for the host to call `set_muted`. Returns the requested value, or
    /// `None` if presses are disabled or the item is not mounted.
    pub fn tap(&mut self, index: usize, now_ms: u64) -> Option<bool> {
        if self.options.press.disabled || !self.is_live() {
            return None;
        }
        let muted = self.store.muted();
        let next = self.controller_mut(index)?.tap(muted);
        if let Some(cb) = &self.options.set_muted {
            cb(next);
        }
        if !self.options.mute.is_controlled() {
            self.set_muted(next, now_ms);
        }
        Some(next)
    }

    /// Long-press down on `index`: holds the item paused. Returns `true` if it was playing.
    pub fn long_press(&mut self, index: usize) -> bool {
        if self.options.press.disabled || !self.is_live() {
            return false;
        }
        let Some(controller) = self.controller_mut(index) else {
            return false;
        };
        let paused = controller.long_press();
        if paused {
            self.notify();
        }
        paused
    }

    /// Press release on `index`. Resumes after a hold. Returns `true` if playback resumed.
    pub fn press_out(&mut self, index: usize) -> bool {
        if self.options.press.disabled || !self.is_live() {
            return false;
        }
        let Some(controller) = self.controller_mut(index) else {
            return false;
        };
        let resumed = controller.press_out();
        if resumed {
            self.notify();
        }
        resumed
    }

    /// The video surface for `index` reached the end.
    ///
    /// `on_end` is always forwarded for valid indexes. With auto-advance enabled, the list is
    /// asked to scroll (animated) to the following item; the current index only moves once the
    /// list reports the new visibility.
    pub fn on_video_end(
        &mut self,
        index: usize,
        mut list: impl ListCommands,
    ) -> Option<ScrollRequest> {
        if !self.is_live() {
            return None;
        }
        if index >= self.items.len() {
            fwarn!(index, count = self.items.len(), "Feed::on_video_end: out of range");
            return None;
        }
        if let Some(cb) = &self.options.on_end {
            cb(index);
        }
        let request = self.controller(index)?.on_end(self.items.len())?;
        fdebug!(from = index, to = request.index, "Feed: auto-advance");
        list.scroll_to_index(request.index, request.animated);
        Some(request)
    }

    pub fn on_video_load(&mut self, index: usize) {
        ftrace!(index, "Feed::on_video_load");
        if index >= self.items.len() || !self.is_live() {
            return;
        }
        if let Some(cb) = &self.options.on_load {
            cb(index);
        }
    }

    /// Advances the overlay timer. Returns `true` when the overlay hid.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let hid = self.overlay.tick(now_ms);
        if hid {
            self.notify();
        }
        hid
    }

    /// Fires a host-scheduled overlay hide. Stale handles are ignored.
    pub fn fire_overlay_timer(&mut self, handle: TimerHandle) -> bool {
        let hid = self.overlay.fire(handle);
        if hid {
            self.notify();
        }
        hid
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    pub fn overlay_icon(&self) -> Option<SoundIcon> {
        self.overlay.icon()
    }

    pub fn render_overlay<'a, N>(&self, icons: &'a SoundIcons<N>) -> Option<&'a N> {
        self.overlay.render(icons)
    }

    /// Playback state for any item in range. Unmounted items read as paused.
    pub fn playback_state(&self, index: usize) -> Option<PlaybackState> {
        if index >= self.items.len() {
            return None;
        }
        Some(match self.controller(index) {
            Some(controller) => controller.playback_state(),
            None => PlaybackState {
                index,
                is_current: self.store.is_current(index),
                is_paused: true,
            },
        })
    }

    /// Props for the video surface of a mounted item.
    pub fn surface_props(&self, index: usize) -> Option<VideoSurfaceProps<'_>> {
        let controller = self.controller(index)?;
        let item = self.items.get(index)?;
        Some(VideoSurfaceProps {
            index,
            source: &item.video_url,
            paused: controller.is_paused(),
            muted: self.store.muted(),
            repeat: controller.repeat(),
            options: self.options.video,
        })
    }

    /// Calls `f` for each mounted item, in index order.
    pub fn for_each_rendered(&self, mut f: impl FnMut(&FeedItem<E>, PlaybackState)) {
        for index in self.mounted.start_index..self.mounted.end_index {
            let (Some(item), Some(controller)) = (self.items.get(index), self.controller(index))
            else {
                continue;
            };
            f(item, controller.playback_state());
        }
    }

    /// Runs a host renderer for the content drawn above a mounted item's video.
    pub fn render_item<R>(
        &self,
        index: usize,
        render: impl FnOnce(&FeedItem<E>, usize) -> R,
    ) -> Option<R> {
        self.controller(index)?;
        let item = self.items.get(index)?;
        Some(render(item, index))
    }

    /// Replaces the items. Every controller is remounted; the current index is clamped.
    pub fn set_items(&mut self, items: Vec<FeedItem<E>>) {
        if !self.is_live() {
            return;
        }
        fdebug!(prev = self.items.len(), next = items.len(), "Feed::set_items");
        self.items = items;
        self.controllers = vec![None; self.items.len()];
        self.mounted = RenderRange {
            start_index: 0,
            end_index: 0,
        };
        let clamped = match self.store.current_index() {
            Some(_) if self.items.is_empty() => None,
            Some(current) => Some(current.min(self.items.len() - 1)),
            None => None,
        };
        self.store.set_current_index(clamped);
        self.sync_controllers();
        self.notify();
    }

    pub fn set_go_to_next(&mut self, go_to_next: bool) {
        self.options.go_to_next = go_to_next;
        for controller in self.controllers.iter_mut().flatten() {
            controller.set_go_to_next(go_to_next);
        }
        self.notify();
    }

    /// Takes effect on the next current-index change.
    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.options.auto_play = auto_play;
        self.notify();
    }

    pub fn set_preload(&mut self, preload: usize) {
        if self.options.preload == preload || !self.is_live() {
            return;
        }
        self.options.preload = preload;
        self.sync_controllers();
        self.notify();
    }

    /// Replaces all options.
    ///
    /// A controlled mute value that differs from the current one is applied as a mute change at
    /// `now_ms`.
    pub fn set_options(&mut self, options: FeedOptions<E>, now_ms: u64) {
        if !self.is_live() {
            return;
        }
        self.batch_update(|feed| {
            let mute = options.mute;
            feed.options = options;
            feed.overlay.set_duration_ms(feed.options.overlay_duration_ms);
            let go_to_next = feed.options.go_to_next;
            for controller in feed.controllers.iter_mut().flatten() {
                controller.set_go_to_next(go_to_next);
            }
            feed.sync_controllers();
            if let MuteMode::Controlled(muted) = mute {
                feed.set_muted(muted, now_ms);
            }
            feed.notify();
        });
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut FeedOptions<E>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            current_index: self.store.current_index(),
            muted: self.store.muted(),
            overlay_visible: self.overlay.is_visible(),
        }
    }

    /// Restores a snapshot. A different mute value is applied as a mute change at `now_ms`.
    ///
    /// `overlay_visible` is not restored: the overlay follows the mute change, if any.
    pub fn restore(&mut self, snapshot: FeedSnapshot, now_ms: u64) {
        if !self.is_live() {
            return;
        }
        self.batch_update(|feed| {
            let current = match snapshot.current_index {
                Some(index) if index < feed.items.len() => Some(index),
                Some(_) => {
                    fwarn!(
                        index = ?snapshot.current_index,
                        count = feed.items.len(),
                        "Feed::restore: index out of range"
                    );
                    feed.store.current_index()
                }
                None => None,
            };
            if feed.store.set_current_index(current) {
                feed.sync_controllers();
                feed.notify();
            }
            feed.set_muted(snapshot.muted, now_ms);
        });
    }

    /// Unmounts every item and cancels the pending overlay hide.
    ///
    /// Teardown is final: later events are ignored and no timer is armed again. Returns the
    /// cancelled timer so hosts with their own timer facility can release it.
    pub fn teardown(&mut self) -> Option<TimerHandle> {
        self.torn_down = true;
        for slot in &mut self.controllers {
            *slot = None;
        }
        self.mounted = RenderRange {
            start_index: 0,
            end_index: 0,
        };
        fdebug!("Feed::teardown");
        self.overlay.teardown()
    }
}
