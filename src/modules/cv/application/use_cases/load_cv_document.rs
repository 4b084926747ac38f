use async_trait::async_trait;

use crate::cv::application::normalizers::NormalizationFailure;
use crate::cv::application::ports::outgoing::CvSourceError;
use crate::cv::domain::entities::CvDocument;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, thiserror::Error)]
pub enum LoadCvDocumentError {
    #[error(transparent)]
    Source(#[from] CvSourceError),

    #[error("malformed cv document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Normalization(#[from] NormalizationFailure),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadCvDocumentUseCase: Send + Sync {
    async fn execute(&self) -> Result<CvDocument, LoadCvDocumentError>;
}
