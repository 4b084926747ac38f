use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::cv::application::ports::outgoing::{ScrollToOptions, Viewport};

#[derive(Debug, Default)]
pub struct ScrollPositionViewport {
    offset: AtomicU64,
    scrolls: AtomicU64,
}

impl ScrollPositionViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_offset(offset: u64) -> Self {
        Self {
            offset: AtomicU64::new(offset),
            scrolls: AtomicU64::new(0),
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset.load(Ordering::SeqCst)
    }

    pub fn scroll_count(&self) -> u64 {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl Viewport for ScrollPositionViewport {
    fn scroll_to(&self, options: ScrollToOptions) {
        self.offset.store(options.top, Ordering::SeqCst);
        self.scrolls.fetch_add(1, Ordering::SeqCst);
        debug!("Viewport scrolled to {} ({:?})", options.top, options.behavior);
    }
}
