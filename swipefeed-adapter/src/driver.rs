use alloc::vec::Vec;

use swipefeed::{Feed, FeedItem, FeedOptions, ScrollRequest};

use crate::Pager;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Press {
    index: usize,
    down_ms: u64,
    long: bool,
}

/// Binds a [`Feed`] to a [`Pager`] and a millisecond clock.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag` / `on_release` for scroll gestures
/// - `press_in` / `press_release` for taps and long presses on the visible page
/// - `video_ended` / `video_loaded` from the video surfaces
/// - `tick(now_ms)` each frame/timer tick
#[derive(Clone, Debug)]
pub struct Driver<E = ()> {
    feed: Feed<E>,
    pager: Pager,
    press: Option<Press>,
}

impl<E> Driver<E> {
    pub fn new(
        items: Vec<FeedItem<E>>,
        options: FeedOptions<E>,
        page_size: u32,
        now_ms: u64,
    ) -> Self {
        let pager = Pager::new(items.len(), page_size, options.viewability_threshold_percent);
        let mut driver = Self {
            feed: Feed::new(items, options, now_ms),
            pager,
            press: None,
        };
        driver.dispatch_visibility();
        driver
    }

    pub fn feed(&self) -> &Feed<E> {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut Feed<E> {
        &mut self.feed
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn into_feed(self) -> Feed<E> {
        self.feed
    }

    /// Forwards pending viewability batches to the feed, in order.
    fn dispatch_visibility(&mut self) {
        for batch in self.pager.take_viewable_changes() {
            self.feed.on_viewable_items_changed(&batch);
        }
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.pager.set_page_size(page_size);
        self.dispatch_visibility();
    }

    pub fn set_items(&mut self, items: Vec<FeedItem<E>>) {
        self.press = None;
        let count = items.len();
        self.feed.set_items(items);
        self.pager.set_count(count);
        self.dispatch_visibility();
    }

    /// A drag moved the list. Cancels a pending press (the gesture became a scroll).
    pub fn on_drag(&mut self, offset: u64, now_ms: u64) {
        if let Some(press) = self.press.take() {
            if press.long {
                self.feed.press_out(press.index);
            }
        }
        self.pager.on_drag(offset, now_ms);
        self.dispatch_visibility();
    }

    /// The drag ended; the pager snaps to the nearest page.
    pub fn on_release(&mut self, now_ms: u64) -> usize {
        self.pager.on_release(now_ms)
    }

    /// Finger down on the visible page.
    pub fn press_in(&mut self, now_ms: u64) {
        let index = self.feed.store().current_index_or_default();
        self.press = Some(Press {
            index,
            down_ms: now_ms,
            long: false,
        });
    }

    /// Finger up. A short press is a tap (mute toggle); a long press resumes playback.
    ///
    /// Returns the requested mute value for taps.
    pub fn press_release(&mut self, now_ms: u64) -> Option<bool> {
        let press = self.press.take()?;
        if press.long {
            self.feed.press_out(press.index);
            return None;
        }
        let muted = self.feed.tap(press.index, now_ms);
        self.feed.press_out(press.index);
        muted
    }

    pub fn video_loaded(&mut self, index: usize) {
        self.feed.on_video_load(index);
    }

    pub fn video_ended(&mut self, index: usize) -> Option<ScrollRequest> {
        self.feed.on_video_end(index, &mut self.pager)
    }

    /// Advances the pager, the long-press recognizer and the overlay timer.
    pub fn tick(&mut self, now_ms: u64) {
        if self.pager.tick(now_ms).is_some() {
            self.dispatch_visibility();
        }

        let delay = self.feed.options().press.delay_long_press_ms;
        if let Some(press) = &mut self.press {
            if !press.long && now_ms.saturating_sub(press.down_ms) >= delay {
                press.long = true;
                let index = press.index;
                adebug!(index, "Driver: long press");
                self.feed.long_press(index);
            }
        }

        self.feed.tick(now_ms);
    }
}
