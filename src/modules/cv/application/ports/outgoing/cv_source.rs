// cv_source.rs
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CvSourceError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} responded with status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("failed to read {location}: {message}")]
    Io { location: String, message: String },

    #[error("invalid cv data location {location}: {message}")]
    InvalidLocation { location: String, message: String },
}

#[async_trait]
pub trait CvSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError>;

    fn location(&self) -> &str;
}
