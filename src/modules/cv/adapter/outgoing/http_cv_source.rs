use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::cv::application::ports::outgoing::{CvSource, CvSourceError};

pub const DEFAULT_CV_DATA_PATH: &str = "/cv-data.json";

#[derive(Debug, Clone)]
pub struct HttpCvSource {
    client: Client,
    url: Url,
}

impl HttpCvSource {
    /// `path` is resolved against `base_url` the way a browser resolves a link.
    pub fn new(base_url: &str, path: &str) -> Result<Self, CvSourceError> {
        let invalid = |message: String| CvSourceError::InvalidLocation {
            location: format!("{base_url} + {path}"),
            message,
        };

        let url = Url::parse(base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| invalid(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }

        Ok(Self::with_client(Client::new(), url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CvSource for HttpCvSource {
    async fn fetch(&self) -> Result<Vec<u8>, CvSourceError> {
        let network = |e: reqwest::Error| CvSourceError::Network {
            url: self.url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CvSourceError::UnexpectedStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        Ok(body.to_vec())
    }

    fn location(&self) -> &str {
        self.url.as_str()
    }
}
