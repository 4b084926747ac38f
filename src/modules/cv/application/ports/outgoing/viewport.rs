#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToOptions {
    pub top: u64,
    pub behavior: ScrollBehavior,
}

impl ScrollToOptions {
    pub fn top_instant() -> Self {
        Self {
            top: 0,
            behavior: ScrollBehavior::Instant,
        }
    }
}

pub trait Viewport: Send + Sync {
    fn scroll_to(&self, options: ScrollToOptions);
}
