pub mod cv_store;

pub use cv_store::{CvState, CvStore};
