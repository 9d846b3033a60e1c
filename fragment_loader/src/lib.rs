pub mod commands;
pub mod config;
pub mod container;
pub mod content;
pub mod error;
pub mod events;
pub mod fragment;
pub mod http;
pub mod lifecycle;
pub mod loader_service;
pub mod outcome;
pub mod response_timings;

pub use commands::fragment_download_command::{DirectoryFragmentDownloadCommand, FragmentDownloadCommand, HttpFragmentDownloadCommand};
pub use config::LoaderConfig;
pub use container::{ContainerHost, InMemoryContainers};
pub use events::loader_event::LoaderEvent;
pub use fragment::{default_sections, FragmentDescriptor};
pub use lifecycle::{DocumentLifecycle, ReadyState};
pub use loader_service::{init, load_all_sections, load_section};
pub use outcome::{FragmentOutcome, LoadReport, OutcomeStatus};
