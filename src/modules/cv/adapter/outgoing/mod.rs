pub mod file_cv_source;
pub mod http_cv_source;
pub mod scroll_position_viewport;

pub use file_cv_source::FileCvSource;
pub use http_cv_source::{HttpCvSource, DEFAULT_CV_DATA_PATH};
pub use scroll_position_viewport::ScrollPositionViewport;
