//! Result records produced by the probes.

use serde::Serialize;

/// Text used when the platform rejects a query without any message.
pub const UNKNOWN_ERROR_DETAIL: &str = "UnknownError";

/// Permission state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    pub fn label(self) -> &'static str {
        match self {
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
            PermissionState::Prompt => "prompt",
        }
    }
}

/// Status of one permission row. `Error` is never reported by the platform;
/// it is synthesized when the query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Granted,
    Denied,
    Prompt,
    Error,
}

impl OutcomeStatus {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeStatus::Granted => "granted",
            OutcomeStatus::Denied => "denied",
            OutcomeStatus::Prompt => "prompt",
            OutcomeStatus::Error => "error",
        }
    }

    pub fn all() -> &'static [OutcomeStatus] {
        &[
            OutcomeStatus::Granted,
            OutcomeStatus::Denied,
            OutcomeStatus::Prompt,
            OutcomeStatus::Error,
        ]
    }
}

impl From<PermissionState> for OutcomeStatus {
    fn from(s: PermissionState) -> Self {
        match s {
            PermissionState::Granted => OutcomeStatus::Granted,
            PermissionState::Denied => OutcomeStatus::Denied,
            PermissionState::Prompt => OutcomeStatus::Prompt,
        }
    }
}

/// Presence of a platform feature. Presence tests are total, so there is no
/// error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureState {
    Granted,
    Denied,
}

impl FeatureState {
    pub fn label(self) -> &'static str {
        match self {
            FeatureState::Granted => "granted",
            FeatureState::Denied => "denied",
        }
    }
}

impl From<bool> for FeatureState {
    fn from(present: bool) -> Self {
        if present {
            FeatureState::Granted
        } else {
            FeatureState::Denied
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlag {
    pub rank: u32,
    pub name: &'static str,
    pub expression: &'static str,
    pub status: FeatureState,
}

/// Settled result of one permission query.
///
/// Fields are private so `error_detail` can only be present (and non-empty)
/// when `status` is [`OutcomeStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionOutcome {
    name: &'static str,
    status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<String>,
}

impl PermissionOutcome {
    pub fn settled(name: &'static str, state: PermissionState) -> Self {
        Self {
            name,
            status: state.into(),
            error_detail: None,
        }
    }

    pub fn failed(name: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if detail.trim().is_empty() {
            UNKNOWN_ERROR_DETAIL.to_string()
        } else {
            detail
        };
        Self {
            name,
            status: OutcomeStatus::Error,
            error_detail: Some(detail),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.status == OutcomeStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_outcome_mirrors_platform_state() {
        for s in [
            PermissionState::Granted,
            PermissionState::Denied,
            PermissionState::Prompt,
        ] {
            let o = PermissionOutcome::settled("camera", s);
            assert_eq!(o.status().label(), s.label());
            assert!(o.error_detail().is_none());
            assert!(!o.is_error());
        }
    }

    #[test]
    fn failed_outcome_always_has_detail() {
        let o = PermissionOutcome::failed("midi", "NotSupportedError: nope");
        assert_eq!(o.status(), OutcomeStatus::Error);
        assert_eq!(o.error_detail(), Some("NotSupportedError: nope"));

        let blank = PermissionOutcome::failed("nfc", "   ");
        assert_eq!(blank.error_detail(), Some(UNKNOWN_ERROR_DETAIL));
    }

    #[test]
    fn outcome_serializes_without_detail_unless_failed() {
        let ok = serde_json::to_string(&PermissionOutcome::settled(
            "push",
            PermissionState::Prompt,
        ))
        .unwrap();
        assert_eq!(ok, r#"{"name":"push","status":"prompt"}"#);

        let err = serde_json::to_string(&PermissionOutcome::failed("nfc", "TypeError: x")).unwrap();
        assert_eq!(
            err,
            r#"{"name":"nfc","status":"error","error_detail":"TypeError: x"}"#
        );
    }

    #[test]
    fn feature_state_follows_presence() {
        assert_eq!(FeatureState::from(true), FeatureState::Granted);
        assert_eq!(FeatureState::from(false), FeatureState::Denied);
    }
}
