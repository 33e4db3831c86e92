use alloc::vec::Vec;

use swipefeed::ViewToken;

/// Decides which equally sized pages count as viewable at a given scroll offset.
///
/// A page is viewable when at least `threshold_percent` of its own area is inside the viewport.
/// Batches are only reported when the viewable set changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewability {
    page_size: u32,
    viewport_size: u32,
    threshold_percent: u8,
    last: Vec<usize>,
}

impl Viewability {
    pub fn new(page_size: u32, viewport_size: u32, threshold_percent: u8) -> Self {
        Self {
            page_size,
            viewport_size,
            threshold_percent: threshold_percent.min(100),
            last: Vec::new(),
        }
    }

    pub fn threshold_percent(&self) -> u8 {
        self.threshold_percent
    }

    pub fn set_viewport(&mut self, page_size: u32, viewport_size: u32) {
        self.page_size = page_size;
        self.viewport_size = viewport_size;
    }

    /// The currently reported viewable indexes, in ascending order.
    pub fn viewable(&self) -> &[usize] {
        &self.last
    }

    /// Computes the viewable pages at `offset` without touching the reported state.
    pub fn compute(&self, count: usize, offset: u64, out: &mut Vec<usize>) {
        out.clear();
        if count == 0 || self.page_size == 0 || self.viewport_size == 0 {
            return;
        }
        let page = self.page_size as u64;
        let view_start = offset;
        let view_end = offset.saturating_add(self.viewport_size as u64);
        let first = (view_start / page) as usize;
        let last = (view_end.saturating_sub(1) / page) as usize;
        for index in first..=last.min(count - 1) {
            let start = index as u64 * page;
            let end = start.saturating_add(page);
            let visible = end.min(view_end).saturating_sub(start.max(view_start));
            // visible / page >= threshold / 100, without floats.
            if visible.saturating_mul(100) >= page.saturating_mul(self.threshold_percent as u64) {
                out.push(index);
            }
        }
    }

    /// Recomputes at `offset`. Returns a batch when the viewable set changed.
    pub fn update(&mut self, count: usize, offset: u64) -> Option<Vec<ViewToken>> {
        let mut next = Vec::new();
        self.compute(count, offset, &mut next);
        if next == self.last {
            return None;
        }
        atrace!(offset, viewable = ?next, "Viewability: changed");
        let batch = next.iter().copied().map(ViewToken::new).collect();
        self.last = next;
        Some(batch)
    }

    /// Forgets the reported set, so the next `update` reports again.
    pub fn reset(&mut self) {
        self.last.clear();
    }
}
