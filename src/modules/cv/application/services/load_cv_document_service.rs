use async_trait::async_trait;
use tracing::debug;

use crate::cv::application::normalizers::NormalizationPipeline;
use crate::cv::application::ports::outgoing::CvSource;
use crate::cv::application::use_cases::{LoadCvDocumentError, LoadCvDocumentUseCase};
use crate::cv::domain::entities::CvDocument;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Debug)]
pub struct LoadCvDocumentService<S>
where
    S: CvSource,
{
    source: S,
    pipeline: NormalizationPipeline,
}

impl<S> LoadCvDocumentService<S>
where
    S: CvSource,
{
    pub fn new(source: S, pipeline: NormalizationPipeline) -> Self {
        Self { source, pipeline }
    }
}

#[async_trait]
impl<S> LoadCvDocumentUseCase for LoadCvDocumentService<S>
where
    S: CvSource + Send + Sync,
{
    async fn execute(&self) -> Result<CvDocument, LoadCvDocumentError> {
        let body = self.source.fetch().await?;
        debug!(
            "Fetched {} bytes of CV data from {}",
            body.len(),
            self.source.location()
        );

        let mut document: CvDocument = serde_json::from_slice(&body)?;
        self.pipeline.run(&mut document)?;

        Ok(document)
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
