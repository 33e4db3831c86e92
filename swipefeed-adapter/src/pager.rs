use alloc::vec::Vec;

use swipefeed::{ListCommands, ScrollRequest, ViewToken};

use crate::{DEFAULT_SCROLL_DURATION_MS, Easing, Tween, Viewability};

/// A framework-neutral vertical pager: full-height pages, snap-to-page scrolling and viewability
/// reporting.
///
/// It stands in for a native paged list. The host drives it by calling:
/// - `on_drag(offset, now_ms)` while the user drags, and `on_release(now_ms)` when they let go
/// - `tick(now_ms)` each frame/timer tick (for snapping and animated scroll-to-index)
///
/// Viewability changes are collected with `take_viewable_changes`.
#[derive(Clone, Debug)]
pub struct Pager {
    count: usize,
    page_size: u32,
    offset: u64,
    duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    requested: Option<ScrollRequest>,
    viewability: Viewability,
    changes: Vec<Vec<ViewToken>>,
}

impl Pager {
    pub fn new(count: usize, page_size: u32, threshold_percent: u8) -> Self {
        let mut pager = Self {
            count,
            page_size,
            offset: 0,
            duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::default(),
            tween: None,
            requested: None,
            viewability: Viewability::new(page_size, page_size, threshold_percent),
            changes: Vec::new(),
        };
        pager.refresh_viewability();
        pager
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || self.requested.is_some()
    }

    pub fn max_offset(&self) -> u64 {
        (self.count.saturating_sub(1) as u64).saturating_mul(self.page_size as u64)
    }

    pub fn offset_for_index(&self, index: usize) -> u64 {
        (index as u64)
            .saturating_mul(self.page_size as u64)
            .min(self.max_offset())
    }

    /// The page closest to the current offset.
    pub fn nearest_index(&self) -> usize {
        if self.page_size == 0 || self.count == 0 {
            return 0;
        }
        let page = self.page_size as u64;
        let index = (self.offset.saturating_add(page / 2) / page) as usize;
        index.min(self.count - 1)
    }

    /// Updates the number of pages, clamping the offset.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.offset = self.offset.min(self.max_offset());
        self.viewability.reset();
        self.refresh_viewability();
    }

    /// Updates the page (viewport) size, keeping the current page in place.
    pub fn set_page_size(&mut self, page_size: u32) {
        if self.page_size == page_size {
            return;
        }
        let index = self.nearest_index();
        self.page_size = page_size;
        self.viewability.set_viewport(page_size, page_size);
        self.tween = None;
        self.offset = self.offset_for_index(index);
        self.refresh_viewability();
    }

    /// A user drag moved the list. Cancels any animation.
    pub fn on_drag(&mut self, offset: u64, _now_ms: u64) {
        self.tween = None;
        self.requested = None;
        self.offset = offset.min(self.max_offset());
        self.refresh_viewability();
    }

    /// The user let go: snap to the nearest page. Returns the target index.
    pub fn on_release(&mut self, now_ms: u64) -> usize {
        let index = self.nearest_index();
        self.start_tween(index, now_ms);
        index
    }

    fn start_tween(&mut self, index: usize, now_ms: u64) {
        let to = self.offset_for_index(index);
        if to == self.offset {
            self.tween = None;
            return;
        }
        atrace!(from = self.offset, to, index, "Pager: tween");
        self.tween = Some(Tween::new(
            self.offset,
            to,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
    }

    /// Advances animations. Returns the new offset when it moved.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        if let Some(request) = self.requested.take() {
            self.start_tween(request.index, now_ms);
        }
        let tween = self.tween?;
        let prev = self.offset;
        self.offset = tween.sample(now_ms).min(self.max_offset());
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        if self.offset == prev {
            return None;
        }
        self.refresh_viewability();
        Some(self.offset)
    }

    fn refresh_viewability(&mut self) {
        if let Some(batch) = self.viewability.update(self.count, self.offset) {
            self.changes.push(batch);
        }
    }

    /// Drains viewability batches in the order they were produced.
    pub fn take_viewable_changes(&mut self) -> Vec<Vec<ViewToken>> {
        core::mem::take(&mut self.changes)
    }

    pub fn viewable(&self) -> &[usize] {
        self.viewability.viewable()
    }
}

impl ListCommands for Pager {
    /// Animated requests start on the next `tick`; immediate ones jump right away.
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        if index >= self.count {
            adebug!(index, count = self.count, "Pager: scroll_to_index out of range");
            return;
        }
        if animated {
            self.requested = Some(ScrollRequest { index, animated });
            return;
        }
        self.tween = None;
        self.requested = None;
        self.offset = self.offset_for_index(index);
        self.refresh_viewability();
    }
}
