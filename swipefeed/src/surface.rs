use alloc::vec::Vec;

use crate::{ScrollRequest, VideoOptions};

/// The imperative side of the host's paged list.
pub trait ListCommands {
    fn scroll_to_index(&mut self, index: usize, animated: bool);
}

impl<T: ListCommands + ?Sized> ListCommands for &mut T {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        (**self).scroll_to_index(index, animated);
    }
}

/// Records commands instead of executing them. Useful for hosts that apply them on the next frame.
impl ListCommands for Vec<ScrollRequest> {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        self.push(ScrollRequest { index, animated });
    }
}

/// Everything a video surface needs to render one item.
///
/// `source`, `paused`, `muted` and `repeat` are owned by the feed; `options` is the host's
/// passthrough configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoSurfaceProps<'a> {
    pub index: usize,
    pub source: &'a str,
    pub paused: bool,
    pub muted: bool,
    pub repeat: bool,
    pub options: VideoOptions,
}
