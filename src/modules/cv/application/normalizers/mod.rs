pub mod duplicate_ids;
pub mod encoded_email;

pub use duplicate_ids::DuplicateIdWarning;
pub use encoded_email::{decode_email, EncodedEmailNormalizer};

use std::fmt;
use std::sync::Arc;

use crate::cv::domain::entities::CvDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("{field} is not valid base64: {message}")]
    InvalidBase64 { field: &'static str, message: String },

    #[error("{field} does not decode to UTF-8 text")]
    InvalidUtf8 { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("normalization step `{step}` failed: {source}")]
pub struct NormalizationFailure {
    pub step: &'static str,
    #[source]
    pub source: NormalizeError,
}

pub trait DocumentNormalizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn normalize(&self, document: &mut CvDocument) -> Result<(), NormalizeError>;
}

/// Ordered list of normalizers. The first failing step aborts the run.
#[derive(Clone, Default)]
pub struct NormalizationPipeline {
    steps: Vec<Arc<dyn DocumentNormalizer>>,
}

impl fmt::Debug for NormalizationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|step| step.name()))
            .finish()
    }
}

impl NormalizationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::new()
            .with_step(EncodedEmailNormalizer)
            .with_step(DuplicateIdWarning)
    }

    pub fn with_step<N>(mut self, step: N) -> Self
    where
        N: DocumentNormalizer + 'static,
    {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn run(&self, document: &mut CvDocument) -> Result<(), NormalizationFailure> {
        for step in &self.steps {
            step.normalize(document)
                .map_err(|source| NormalizationFailure {
                    step: step.name(),
                    source,
                })?;
        }
        Ok(())
    }
}
