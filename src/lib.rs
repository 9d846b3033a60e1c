use std::path::PathBuf;

use log::{debug, info};
use tokio::sync::mpsc;

use fragment_loader::{init, DirectoryFragmentDownloadCommand, DocumentLifecycle, FragmentDownloadCommand, HttpFragmentDownloadCommand, LoadReport, LoaderConfig, LoaderEvent};
use page_dom::PageDocument;

// A simple type alias so as to DRY.
pub type DynResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Debug, PartialEq)]
pub enum FragmentSource {
    Http { base_url: String },
    Directory { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssembleOptions {
    pub page: PathBuf,
    pub source: FragmentSource,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub struct AssembledPage {
    pub html: String,
    pub report: LoadReport,
}

/// Reads the page, loads every configured section into it and renders the result.
pub async fn assemble(options: &AssembleOptions) -> DynResult<AssembledPage> {
    let mut config = match &options.config {
        Some(path) => LoaderConfig::from_file(path).await?,
        None => LoaderConfig::default(),
    };

    let download_command: Box<dyn FragmentDownloadCommand> = match &options.source {
        FragmentSource::Http { base_url } => {
            config.base_url = Some(base_url.clone());
            Box::new(HttpFragmentDownloadCommand::from_config(config.clone()))
        }
        FragmentSource::Directory { path } => Box::new(DirectoryFragmentDownloadCommand::new(path.clone())),
    };

    let lifecycle = DocumentLifecycle::new();
    let source = tokio::fs::read_to_string(&options.page).await?;
    let document = PageDocument::parse(&source);
    debug!("Containers on page: {:?}", document.container_ids());
    lifecycle.mark_content_loaded();

    let (tx, mut rx) = mpsc::channel(1);
    let report = init(&lifecycle, &document, download_command.as_ref(), &config.sections, Some(&tx)).await?;
    if let Some(LoaderEvent::SectionsLoaded { report }) = rx.recv().await {
        info!("sectionsLoaded: {} of {} sections attempted", report.outcomes.len(), config.sections.len());
    }
    lifecycle.mark_complete();

    Ok(AssembledPage {
        html: document.render(),
        report,
    })
}
