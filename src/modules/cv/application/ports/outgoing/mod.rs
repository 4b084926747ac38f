pub mod cv_source;
pub mod viewport;

pub use cv_source::{CvSource, CvSourceError};
pub use viewport::{ScrollBehavior, ScrollToOptions, Viewport};
