use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, trace};

use crate::config::LoaderConfig;
use crate::error::FetchError;
use crate::http::http_client::{HttpClient, HttpClientImpl};
use crate::http::http_utils;

#[async_trait]
pub trait FragmentDownloadCommand: Sync + Send {
    async fn download_fragment(&self, file: &str) -> Result<String, FetchError>;
}

/// Downloads fragments from `<base_url><section_path_prefix><file>`.
pub struct HttpFragmentDownloadCommand {
    config: LoaderConfig,
    http_client: Arc<dyn HttpClient>,
}

impl HttpFragmentDownloadCommand {
    pub fn new(config: LoaderConfig, http_client: Arc<dyn HttpClient>) -> HttpFragmentDownloadCommand {
        HttpFragmentDownloadCommand { config, http_client }
    }

    pub fn from_config(config: LoaderConfig) -> HttpFragmentDownloadCommand {
        let http_client = Arc::new(HttpClientImpl::new(config.user_agent.clone()));
        HttpFragmentDownloadCommand::new(config, http_client)
    }
}

#[async_trait]
impl FragmentDownloadCommand for HttpFragmentDownloadCommand {
    async fn download_fragment(&self, file: &str) -> Result<String, FetchError> {
        let mut uri = self.config.fragment_uri(file)
            .map_err(|error| FetchError::InvalidUri(error.to_string()))?;
        let mut num_redirects = 0;
        let response = loop {
            let response = self.http_client.get(uri.clone()).await.map_err(FetchError::Transport)?;
            trace!("GET for {}: {} {:?}", uri, response.status(), response.headers());
            if !response.status().is_redirection() {
                break response;
            }
            let location = match response.headers().get("location").and_then(|value| value.to_str().ok()) {
                Some(location) => location.to_string(),
                None => return Err(FetchError::Status(response.status().as_u16())),
            };
            if num_redirects >= self.config.maximum_redirects {
                return Err(FetchError::TooManyRedirects(num_redirects));
            }
            num_redirects += 1;
            let next_uri = http_utils::resolve_location(&uri, &location)?;
            debug!("Following redirect {} -> {}", uri, next_uri);
            uri = next_uri;
        };

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = hyper::body::to_bytes(response.into_body()).await
            .map_err(|error| FetchError::Body(error.to_string()))?;
        Ok(String::from_utf8_lossy(bytes.as_ref()).to_string())
    }
}

/// Reads fragments from a local directory, for assembling pages offline.
pub struct DirectoryFragmentDownloadCommand {
    root: PathBuf,
}

impl DirectoryFragmentDownloadCommand {
    pub fn new(root: impl Into<PathBuf>) -> DirectoryFragmentDownloadCommand {
        DirectoryFragmentDownloadCommand { root: root.into() }
    }
}

#[async_trait]
impl FragmentDownloadCommand for DirectoryFragmentDownloadCommand {
    async fn download_fragment(&self, file: &str) -> Result<String, FetchError> {
        let path = self.root.join(file);
        trace!("Reading fragment {:?}", path);
        let bytes = tokio::fs::read(&path).await?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }
}
