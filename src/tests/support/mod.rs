pub mod fixtures;
pub mod log_capture;
pub mod static_host;
pub mod stubs;
