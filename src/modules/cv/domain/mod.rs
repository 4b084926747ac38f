pub mod entities;
pub mod theme;

pub use entities::{CvDocument, Education, Experience, Profile, Skills};
pub use theme::{Theme, UnknownThemeError};
