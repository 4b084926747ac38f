use std::env;
use std::path::PathBuf;

use crate::cv::adapter::outgoing::DEFAULT_CV_DATA_PATH;
use crate::cv::domain::theme::{Theme, UnknownThemeError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Where the host binary reads the CV document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvDataLocation {
    Http { base_url: String, path: String },
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_location: CvDataLocation,
    pub default_theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CV_DEFAULT_THEME: {0}")]
    InvalidTheme(#[from] UnknownThemeError),
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` if present, otherwise `.env`.
    pub fn load_dotenv() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_location = match var("CV_DATA_FILE") {
            Some(file) => CvDataLocation::File(PathBuf::from(file)),
            None => CvDataLocation::Http {
                base_url: var("CV_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                path: var("CV_DATA_PATH").unwrap_or_else(|| DEFAULT_CV_DATA_PATH.to_string()),
            },
        };

        let default_theme = match var("CV_DEFAULT_THEME") {
            Some(theme) => theme.parse::<Theme>()?,
            None => Theme::default(),
        };

        Ok(Self {
            data_location,
            default_theme,
        })
    }
}
