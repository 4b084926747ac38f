pub mod cv;
pub mod navigation;
