// Fragment loader: fills page containers with fetched html fragments

use futures::future::join_all;
use log::{debug, error, info, warn};
use tokio::sync::mpsc::Sender;

use crate::commands::fragment_download_command::FragmentDownloadCommand;
use crate::container::ContainerHost;
use crate::content::FragmentContent;
use crate::error::LoaderError;
use crate::events::loader_event::LoaderEvent;
use crate::fragment::FragmentDescriptor;
use crate::lifecycle::DocumentLifecycle;
use crate::outcome::{FragmentOutcome, LoadReport, OutcomeStatus};
use crate::response_timings::ResponseTimings;

/// Loads one fragment into its container.
///
/// Never fails: a missing container is logged and skipped, a failed download leaves
/// the error placeholder in the container. The returned outcome says which happened.
pub async fn load_section(host: &dyn ContainerHost,
                          download_command: &dyn FragmentDownloadCommand,
                          descriptor: &FragmentDescriptor) -> FragmentOutcome {
    let mut response_timings = ResponseTimings::new(descriptor.file.clone());
    let container_id = descriptor.container_id.as_str();

    if !host.contains_container(container_id) {
        warn!("Container not found: {}", container_id);
        response_timings.finish();
        return FragmentOutcome {
            descriptor: descriptor.clone(),
            status: OutcomeStatus::ContainerMissing,
            response_timings,
        };
    }

    write_content(host, container_id, &FragmentContent::Loading);

    let (content, status) = match download_command.download_fragment(&descriptor.file).await {
        Ok(html) => {
            debug!("Loaded {} into {} ({} bytes)", descriptor.file, container_id, html.len());
            let status = OutcomeStatus::Loaded { bytes: html.len() };
            (FragmentContent::Loaded(html), status)
        }
        Err(fetch_error) => {
            error!("Error loading {}: {}", descriptor.file, fetch_error);
            let status = OutcomeStatus::Failed { reason: fetch_error.to_string() };
            (FragmentContent::Failed(fetch_error), status)
        }
    };
    debug_assert!(content.is_terminal());
    write_content(host, container_id, &content);
    response_timings.finish();

    FragmentOutcome {
        descriptor: descriptor.clone(),
        status,
        response_timings,
    }
}

fn write_content(host: &dyn ContainerHost, container_id: &str, content: &FragmentContent) {
    if let Err(container_error) = host.set_container_content(container_id, content.markup()) {
        warn!("Could not write into {}: {}", container_id, container_error);
    }
}

/// Loads all sections concurrently and waits for every one of them to settle.
///
/// Fragments are independent; each container is written as soon as its own download
/// resolves. The report and the `SectionsLoaded` event are produced exactly once,
/// after the last fragment settled.
pub async fn load_all_sections(host: &dyn ContainerHost,
                               download_command: &dyn FragmentDownloadCommand,
                               sections: &[FragmentDescriptor],
                               events: Option<&Sender<LoaderEvent>>) -> LoadReport {
    debug!("Loading {} sections", sections.len());
    let loads = sections.iter()
        .map(|descriptor| load_section(host, download_command, descriptor));
    // load_section can't fail, so there is no aggregate error to handle here
    let report = LoadReport::new(join_all(loads).await);

    info!("Sections loaded: {} ok, {} failed, {} without container",
          report.loaded_count(), report.failed_count(), report.missing_count());

    if let Some(events) = events {
        if let Err(send_error) = events.send(LoaderEvent::SectionsLoaded { report: report.clone() }).await {
            warn!("Nobody is listening for SectionsLoaded: {}", send_error);
        }
    }
    report
}

/// Loads all sections once the document finished loading.
///
/// Only the first call per document does anything; later calls return
/// `LoaderError::AlreadyInitialized`.
pub async fn init(lifecycle: &DocumentLifecycle,
                  host: &dyn ContainerHost,
                  download_command: &dyn FragmentDownloadCommand,
                  sections: &[FragmentDescriptor],
                  events: Option<&Sender<LoaderEvent>>) -> Result<LoadReport, LoaderError> {
    if !lifecycle.claim_init() {
        warn!("Loader already initialized for this document, ignoring init");
        return Err(LoaderError::AlreadyInitialized);
    }

    debug!("Document ready state on init: {:?}", lifecycle.ready_state());
    lifecycle.wait_until_ready().await;
    Ok(load_all_sections(host, download_command, sections, events).await)
}
