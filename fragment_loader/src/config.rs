use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoaderError;
use crate::fragment::{default_sections, FragmentDescriptor};

pub const DEFAULT_SECTION_PATH_PREFIX: &str = "secciones/";
pub const DEFAULT_USER_AGENT: &str = "fragment_include";
pub const DEFAULT_MAXIMUM_REDIRECTS: u8 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub base_url: Option<String>,
    #[serde(default = "default_section_path_prefix")]
    pub section_path_prefix: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_maximum_redirects")]
    pub maximum_redirects: u8,
    #[serde(default = "default_sections")]
    pub sections: Vec<FragmentDescriptor>,
}

fn default_section_path_prefix() -> String {
    String::from(DEFAULT_SECTION_PATH_PREFIX)
}

fn default_user_agent() -> String {
    String::from(DEFAULT_USER_AGENT)
}

fn default_maximum_redirects() -> u8 {
    DEFAULT_MAXIMUM_REDIRECTS
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            base_url: None,
            section_path_prefix: default_section_path_prefix(),
            user_agent: default_user_agent(),
            maximum_redirects: default_maximum_redirects(),
            sections: default_sections(),
        }
    }
}

impl LoaderConfig {
    pub fn new(base_url: String) -> LoaderConfig {
        LoaderConfig {
            base_url: Some(base_url),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<LoaderConfig, LoaderError> {
        serde_json::from_str(json).map_err(|error| LoaderError::Config(error.to_string()))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<LoaderConfig, LoaderError> {
        let json = tokio::fs::read_to_string(path).await?;
        LoaderConfig::from_json(&json)
    }

    /// Full uri of a fragment file, e.g. `http://localhost:8080/secciones/navbar.html`.
    pub fn fragment_uri(&self, file: &str) -> Result<String, LoaderError> {
        let base_url = self.base_url.as_ref()
            .ok_or_else(|| LoaderError::Config(String::from("no base_url configured")))?;
        let separator = if base_url.ends_with('/') { "" } else { "/" };
        Ok(format!("{}{}{}{}", base_url, separator, self.section_path_prefix, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = LoaderConfig::from_json("{}").unwrap();

        assert_eq!(config, LoaderConfig::default());
        assert_eq!(config.sections.len(), 10);
    }

    #[test]
    fn sections_can_be_overridden() {
        let config = LoaderConfig::from_json(r#"{
            "base_url": "http://localhost:8080",
            "sections": [{"id": "footer-container", "file": "footer.html"}]
        }"#).unwrap();

        assert_eq!(config.base_url, Some(String::from("http://localhost:8080")));
        assert_eq!(config.sections, vec![FragmentDescriptor::new("footer-container", "footer.html")]);
        assert_eq!(config.section_path_prefix, "secciones/");
        assert_eq!(config.maximum_redirects, 10);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let result = LoaderConfig::from_json("{ sections: ");

        assert!(matches!(result, Err(LoaderError::Config(_))));
    }

    #[test]
    fn fragment_uri_joins_base_prefix_and_file() {
        let with_slash = LoaderConfig::new("http://localhost:8080/".into());
        let without_slash = LoaderConfig::new("http://localhost:8080".into());

        assert_eq!(with_slash.fragment_uri("navbar.html").unwrap(), "http://localhost:8080/secciones/navbar.html");
        assert_eq!(without_slash.fragment_uri("navbar.html").unwrap(), "http://localhost:8080/secciones/navbar.html");
    }

    #[test]
    fn fragment_uri_requires_base_url() {
        assert!(matches!(LoaderConfig::default().fragment_uri("navbar.html"), Err(LoaderError::Config(_))));
    }
}
