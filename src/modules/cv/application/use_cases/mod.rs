pub mod load_cv_document;

pub use load_cv_document::{LoadCvDocumentError, LoadCvDocumentUseCase};
