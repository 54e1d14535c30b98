//! Client configuration
//!
//! Chooses which [`DataApi`] backs the store. A fixture file wins over an
//! API URL; with neither, an empty in-memory store is used.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::{DataApi, FileApi, HttpApi, InMemoryApi};
use crate::error::{CareError, CareResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where page data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Http {
        base_url: Url,
        token: Option<String>,
        timeout: Duration,
    },
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend: Backend,
}

impl ClientConfig {
    /// Build from the raw command-line/env values.
    pub fn from_parts(
        api_url: Option<&str>,
        token: Option<String>,
        data_file: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> CareResult<Self> {
        let backend = if let Some(path) = data_file {
            Backend::File(path)
        } else if let Some(raw) = api_url {
            let base_url = Url::parse(raw.trim())?;
            if !matches!(base_url.scheme(), "http" | "https") {
                return Err(CareError::Config(format!(
                    "unsupported URL scheme: {}",
                    base_url.scheme()
                )));
            }
            let timeout = match timeout_secs {
                Some(0) => return Err(CareError::Config("timeout must be positive".to_string())),
                Some(secs) => Duration::from_secs(secs),
                None => DEFAULT_TIMEOUT,
            };
            Backend::Http {
                base_url,
                token: token.filter(|t| !t.is_empty()),
                timeout,
            }
        } else {
            Backend::Memory
        };

        Ok(Self { backend })
    }

    /// Instantiate the configured backend.
    pub fn build_api(&self) -> CareResult<Arc<dyn DataApi>> {
        let api: Arc<dyn DataApi> = match &self.backend {
            Backend::Http {
                base_url,
                token,
                timeout,
            } => {
                tracing::info!(url = %base_url, "Using HTTP data API");
                Arc::new(HttpApi::new(base_url.clone(), token.clone(), *timeout)?)
            }
            Backend::File(path) => {
                tracing::info!(path = %path.display(), "Using fixture file data API");
                Arc::new(FileApi::new(path.clone()))
            }
            Backend::Memory => {
                tracing::warn!("No API URL or data file configured, using empty in-memory data");
                Arc::new(InMemoryApi::new())
            }
        };
        Ok(api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_wins() {
        let config = ClientConfig::from_parts(
            Some("https://care.example/api"),
            None,
            Some(PathBuf::from("fixture.json")),
            None,
        )
        .unwrap();
        assert_eq!(config.backend, Backend::File(PathBuf::from("fixture.json")));
    }

    #[test]
    fn test_http_backend_defaults() {
        let config =
            ClientConfig::from_parts(Some("https://care.example/api"), Some(String::new()), None, None)
                .unwrap();
        match config.backend {
            Backend::Http { token, timeout, .. } => {
                assert!(token.is_none());
                assert_eq!(timeout, DEFAULT_TIMEOUT);
            }
            other => panic!("unexpected backend: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientConfig::from_parts(Some("not a url"), None, None, None),
            Err(CareError::Url(_))
        ));
        assert!(matches!(
            ClientConfig::from_parts(Some("ftp://care.example"), None, None, None),
            Err(CareError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_parts(Some("https://care.example"), None, None, Some(0)),
            Err(CareError::Config(_))
        ));
    }

    #[test]
    fn test_memory_fallback() {
        let config = ClientConfig::from_parts(None, None, None, None).unwrap();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.build_api().is_ok());
    }
}
