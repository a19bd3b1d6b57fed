//! # Workflow Guidance
//!
//! Advisory queries for the presentation layer: what transitions are
//! currently legal and what a coordinator should consider doing next.
//! Never authoritative; the validators in [`super::transitions`] and
//! [`super::guards`] remain the source of truth.

use super::states::PoStatus;
use super::transitions::allowed_transitions;
use crate::constants::status_groups;
use serde::Serialize;

/// Workflow context rendered as banners/hints next to a PO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowInfo {
    pub allowed_transitions: Vec<PoStatus>,
    pub is_terminal: bool,
    pub next_steps: Vec<String>,
}

/// Workflow hints for a PO in `current` status (`None` for a record that
/// has not been saved with a status yet).
pub fn workflow_info(current: Option<PoStatus>) -> WorkflowInfo {
    let Some(status) = current else {
        return WorkflowInfo {
            allowed_transitions: status_groups::NEW_RECORD_STATUS_CHOICES.to_vec(),
            is_terminal: false,
            next_steps: vec![
                "Save as Draft to keep editing before approval".to_string(),
                "Set to Open to submit for approval".to_string(),
            ],
        };
    };

    let allowed = allowed_transitions(status).to_vec();
    WorkflowInfo {
        is_terminal: allowed.is_empty(),
        next_steps: next_steps(status),
        allowed_transitions: allowed,
    }
}

fn next_steps(status: PoStatus) -> Vec<String> {
    let steps: &[&str] = match status {
        PoStatus::Draft => &[
            "Set to Open when ready for approval",
            "Set to Cancelled if the PO is no longer needed",
        ],
        PoStatus::Open => &[
            "Set to Active once approved and vendor is ready",
            "Set to Cancelled if the PO is no longer needed",
        ],
        PoStatus::Active => &[
            "Set to Closed when all work is complete",
            "Set to Cancelled if PO needs to be terminated",
        ],
        PoStatus::Closed | PoStatus::Cancelled => &[],
    };
    steps.iter().map(|s| (*s).to_string()).collect()
}

/// Choices for the status dropdown: the current status first (so "no
/// change" stays selectable, even when terminal), then the legal targets.
pub fn allowed_next_statuses(current: Option<PoStatus>) -> Vec<PoStatus> {
    match current {
        None => status_groups::NEW_RECORD_STATUS_CHOICES.to_vec(),
        Some(status) => {
            let mut choices = vec![status];
            choices.extend_from_slice(allowed_transitions(status));
            choices
        }
    }
}
