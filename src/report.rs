//! Aggregated results of one page load.

use serde::Serialize;

use crate::status::{FeatureFlag, FeatureState, OutcomeStatus, PermissionOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub granted: u32,
    pub denied: u32,
    pub prompt: u32,
    pub error: u32,
}

impl Summary {
    pub fn count(&self, status: OutcomeStatus) -> u32 {
        match status {
            OutcomeStatus::Granted => self.granted,
            OutcomeStatus::Denied => self.denied,
            OutcomeStatus::Prompt => self.prompt,
            OutcomeStatus::Error => self.error,
        }
    }

    pub fn total(&self) -> u32 {
        self.granted + self.denied + self.prompt + self.error
    }

    fn record(&mut self, status: OutcomeStatus) {
        match status {
            OutcomeStatus::Granted => self.granted += 1,
            OutcomeStatus::Denied => self.denied += 1,
            OutcomeStatus::Prompt => self.prompt += 1,
            OutcomeStatus::Error => self.error += 1,
        }
    }

    /// One-line rendering, e.g. `19 permissions: 3 granted, 1 denied, 12 prompt, 3 error`.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = OutcomeStatus::all()
            .iter()
            .map(|s| format!("{} {}", self.count(*s), s.label()))
            .collect();
        let noun = if self.total() == 1 {
            "permission"
        } else {
            "permissions"
        };
        format!("{} {}: {}", self.total(), noun, parts.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub features: Vec<FeatureFlag>,
    pub permissions: Vec<PermissionOutcome>,
}

impl Report {
    pub fn new(features: Vec<FeatureFlag>, permissions: Vec<PermissionOutcome>) -> Self {
        Self {
            features,
            permissions,
        }
    }

    /// Counts over the permission rows only.
    pub fn summary(&self) -> Summary {
        summarize(&self.permissions)
    }

    pub fn features_present(&self) -> usize {
        self.features
            .iter()
            .filter(|f| f.status == FeatureState::Granted)
            .count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn summarize(outcomes: &[PermissionOutcome]) -> Summary {
    let mut s = Summary::default();
    for o in outcomes {
        s.record(o.status());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PermissionState;

    fn sample() -> Report {
        Report::new(
            vec![
                FeatureFlag {
                    rank: 1,
                    name: "Cookies",
                    expression: "navigator.cookieEnabled",
                    status: FeatureState::Granted,
                },
                FeatureFlag {
                    rank: 2,
                    name: "BarcodeDetector",
                    expression: "!!(BarcodeDetector in window)",
                    status: FeatureState::Denied,
                },
            ],
            vec![
                PermissionOutcome::settled("geolocation", PermissionState::Prompt),
                PermissionOutcome::settled("notifications", PermissionState::Denied),
                PermissionOutcome::settled("push", PermissionState::Prompt),
                PermissionOutcome::failed("midi", "NotSupportedError: midi"),
                PermissionOutcome::settled("camera", PermissionState::Granted),
            ],
        )
    }

    #[test]
    fn summary_counts_each_status() {
        let s = sample().summary();
        assert_eq!(s.granted, 1);
        assert_eq!(s.denied, 1);
        assert_eq!(s.prompt, 2);
        assert_eq!(s.error, 1);
        assert_eq!(s.total(), 5);
        assert_eq!(
            s.describe(),
            "5 permissions: 1 granted, 1 denied, 2 prompt, 1 error"
        );
    }

    #[test]
    fn empty_report_has_zero_summary() {
        let r = Report::default();
        assert_eq!(r.summary(), Summary::default());
        assert_eq!(r.features_present(), 0);
    }

    #[test]
    fn json_export_keeps_row_order() {
        let r = sample();
        assert_eq!(r.features_present(), 1);

        let json = r.to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = v["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["geolocation", "notifications", "push", "midi", "camera"]);
        assert_eq!(v["permissions"][3]["status"], "error");
        assert_eq!(v["features"][1]["status"], "denied");
    }
}
