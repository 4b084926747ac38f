pub mod load_cv_document_service;

pub use load_cv_document_service::LoadCvDocumentService;
