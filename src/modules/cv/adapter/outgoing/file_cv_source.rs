use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvSource, CvSourceError};

#[derive(Debug, Clone)]
pub struct FileCvSource {
    path: PathBuf,
    location: String,
}

impl FileCvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl CvSource for FileCvSource {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| CvSourceError::Io {
                location: self.location.clone(),
                message: e.to_string(),
            })
    }

    fn location(&self) -> &str {
        &self.location
    }
}
