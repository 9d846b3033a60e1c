use crate::fragment::FragmentDescriptor;
use crate::response_timings::ResponseTimings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Fetched content was written into the container
    Loaded { bytes: usize },
    /// The error placeholder was written into the container
    Failed { reason: String },
    /// Nothing was fetched or written
    ContainerMissing,
}

#[derive(Debug, Clone)]
pub struct FragmentOutcome {
    pub descriptor: FragmentDescriptor,
    pub status: OutcomeStatus,
    pub response_timings: ResponseTimings,
}

impl FragmentOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, OutcomeStatus::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed { .. })
    }

    pub fn is_container_missing(&self) -> bool {
        self.status == OutcomeStatus::ContainerMissing
    }
}

/// Outcomes of one load run, in section order.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub outcomes: Vec<FragmentOutcome>,
}

impl LoadReport {
    pub fn new(outcomes: Vec<FragmentOutcome>) -> LoadReport {
        LoadReport { outcomes }
    }

    pub fn loaded_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_loaded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_failed()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_container_missing()).count()
    }

    pub fn all_loaded(&self) -> bool {
        self.outcomes.iter().all(FragmentOutcome::is_loaded)
    }

    pub fn outcome_for(&self, container_id: &str) -> Option<&FragmentOutcome> {
        self.outcomes.iter().find(|outcome| outcome.descriptor.container_id == container_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(container_id: &str, status: OutcomeStatus) -> FragmentOutcome {
        FragmentOutcome {
            descriptor: FragmentDescriptor::new(container_id, "any.html"),
            status,
            response_timings: ResponseTimings::new("any.html".into()),
        }
    }

    #[test]
    fn counts_outcomes_by_status() {
        let report = LoadReport::new(vec![
            outcome("a", OutcomeStatus::Loaded { bytes: 3 }),
            outcome("b", OutcomeStatus::Failed { reason: "HTTP error! status: 500".into() }),
            outcome("c", OutcomeStatus::ContainerMissing),
            outcome("d", OutcomeStatus::Loaded { bytes: 0 }),
        ]);

        assert_eq!(report.loaded_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.missing_count(), 1);
        assert!(!report.all_loaded());
        assert!(report.outcome_for("c").unwrap().is_container_missing());
        assert!(report.outcome_for("x").is_none());
    }

    #[test]
    fn empty_report_counts_as_all_loaded() {
        assert!(LoadReport::default().all_loaded());
    }
}
