use crate::outcome::LoadReport;

#[derive(Debug, Clone)]
pub enum LoaderEvent {
    /// Every section was attempted, whatever the individual outcome.
    SectionsLoaded {
        report: LoadReport,
    },
}
