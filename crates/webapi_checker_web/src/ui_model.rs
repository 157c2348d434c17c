//! Table models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! row layout on the host.

use webapi_checker::report::summarize;
use webapi_checker::status::{FeatureFlag, OutcomeStatus, PermissionOutcome};

pub const FEATURE_COLUMNS: [&str; 4] = ["#", "State", "Name", "Code"];
pub const PERMISSION_COLUMNS: [&str; 4] = ["#", "state", "name", "error"];

pub const PERMISSIONS_CAPTION: &str = "Check permissions with ";
pub const PERMISSIONS_CAPTION_CODE: &str = "navigator.permissions.query";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub rank: String,
    pub state: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

impl From<&FeatureFlag> for FeatureRow {
    fn from(f: &FeatureFlag) -> Self {
        Self {
            rank: f.rank.to_string(),
            state: f.status.label(),
            name: f.name,
            code: f.expression,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRow {
    /// 1-based position in the table.
    pub index: usize,
    pub state: &'static str,
    pub class: &'static str,
    pub name: &'static str,
    /// Empty unless the query failed.
    pub error: String,
}

pub fn status_class(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Granted => "state granted",
        OutcomeStatus::Denied => "state denied",
        OutcomeStatus::Prompt => "state prompt",
        OutcomeStatus::Error => "state error",
    }
}

pub fn permission_rows(outcomes: &[PermissionOutcome]) -> Vec<PermissionRow> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, o)| PermissionRow {
            index: i + 1,
            state: o.status().label(),
            class: status_class(o.status()),
            name: o.name(),
            error: o.error_detail().unwrap_or_default().to_string(),
        })
        .collect()
}

/// Footer under the permission table. Empty until the batch has settled.
pub fn permissions_footer(outcomes: &[PermissionOutcome]) -> String {
    if outcomes.is_empty() {
        return String::new();
    }
    summarize(outcomes).describe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use webapi_checker::status::{FeatureState, PermissionState};

    #[test]
    fn feature_row_shows_rank_state_and_expression() {
        let flag = FeatureFlag {
            rank: 4,
            name: "serviceWorker",
            expression: "!!(serviceWorker in navigator)",
            status: FeatureState::Granted,
        };
        let row = FeatureRow::from(&flag);
        assert_eq!(row.rank, "4");
        assert_eq!(row.state, "granted");
        assert_eq!(row.name, "serviceWorker");
        assert_eq!(row.code, "!!(serviceWorker in navigator)");
    }

    #[test]
    fn permission_rows_are_numbered_from_one() {
        let outcomes = vec![
            PermissionOutcome::settled("geolocation", PermissionState::Prompt),
            PermissionOutcome::failed("midi", "NotSupportedError: midi"),
            PermissionOutcome::settled("camera", PermissionState::Granted),
        ];
        let rows = permission_rows(&outcomes);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].state, "prompt");
        assert!(rows[0].error.is_empty());

        assert_eq!(rows[1].name, "midi");
        assert_eq!(rows[1].state, "error");
        assert_eq!(rows[1].class, "state error");
        assert_eq!(rows[1].error, "NotSupportedError: midi");

        assert_eq!(rows[2].index, 3);
        assert_eq!(rows[2].class, "state granted");
    }

    #[test]
    fn footer_is_empty_before_results_arrive() {
        assert_eq!(permissions_footer(&[]), "");
        let outcomes = vec![PermissionOutcome::settled("nfc", PermissionState::Denied)];
        assert_eq!(
            permissions_footer(&outcomes),
            "1 permission: 0 granted, 1 denied, 0 prompt, 0 error"
        );
    }

    #[test]
    fn table_headers_are_stable() {
        assert_eq!(FEATURE_COLUMNS.len(), PERMISSION_COLUMNS.len());
        assert!(FEATURE_COLUMNS.iter().all(|c| !c.trim().is_empty()));
        assert!(PERMISSION_COLUMNS.iter().all(|c| !c.trim().is_empty()));
    }
}
