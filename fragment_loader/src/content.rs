use crate::error::FetchError;

pub const LOADING_PLACEHOLDER: &str = r#"<div class="loading-spinner"></div>"#;
pub const ERROR_PLACEHOLDER: &str = r#"<div class="error-message">Error al cargar la sección</div>"#;

/// What a container shows at a given point of its load sequence.
#[derive(Debug)]
pub enum FragmentContent {
    Loading,
    Loaded(String),
    Failed(FetchError),
}

impl FragmentContent {
    /// Markup to write into the container. Fetched html is passed through verbatim.
    pub fn markup(&self) -> &str {
        match self {
            FragmentContent::Loading => LOADING_PLACEHOLDER,
            FragmentContent::Loaded(html) => html,
            FragmentContent::Failed(_) => ERROR_PLACEHOLDER,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FragmentContent::Loading)
    }
}
