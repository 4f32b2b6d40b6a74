//! Operator-facing messages for lifecycle results.

use tracksuite_license::{ActivationKind, ActivationOutcome, Evaluation, LicenseState, TimeLeft};

/// Lines describing a status evaluation.
#[must_use]
pub fn status_lines(eval: &Evaluation) -> Vec<String> {
    match eval.state {
        LicenseState::Genuine => {
            let mut lines = Vec::with_capacity(3);
            if let Some(TimeLeft::HoursAndDays { hours, days }) = eval.time_left {
                lines.push(format!("License hours left: {hours}"));
                lines.push(format!("License days left: {days}"));
            }
            lines.push("License is genuinely activated".to_string());
            lines
        }
        LicenseState::Expired => vec!["License is activated, but has expired".to_string()],
        LicenseState::Suspended => {
            vec!["License is activated, but has been suspended".to_string()]
        }
        LicenseState::GracePeriodOver => {
            vec!["License is activated, but requires server sync".to_string()]
        }
        LicenseState::ProductIdInvalid => vec!["The product id is incorrect".to_string()],
        LicenseState::TrialGenuine => match eval.time_left {
            Some(TimeLeft::Hours(hours)) => vec![format!("Trial hours left: {hours}")],
            Some(TimeLeft::Days(days)) => vec![format!("Trial days left: {days}")],
            _ => Vec::new(),
        },
        LicenseState::TrialExpired => vec!["Trial has expired".to_string()],
        LicenseState::NotFound { status } => vec![format!("No license found, status {status}")],
    }
}

/// Line echoing the key before an activation.
#[must_use]
pub fn key_line(kind: ActivationKind, key: &str) -> String {
    match kind {
        ActivationKind::License => format!("License key is '{key}'"),
        ActivationKind::Trial => format!("Trial key is '{key}'"),
    }
}

/// Line describing an activation outcome.
#[must_use]
pub fn activation_line(kind: ActivationKind, outcome: ActivationOutcome) -> String {
    match (kind, outcome) {
        (ActivationKind::License, ActivationOutcome::Activated) => {
            "License activated successfully".to_string()
        }
        (ActivationKind::License, ActivationOutcome::Expired) => "License has expired!".to_string(),
        (ActivationKind::License, ActivationOutcome::Failed(status)) => {
            format!("License activation failed: {status}")
        }
        (ActivationKind::Trial, ActivationOutcome::Activated) => {
            "Trial activated successfully!".to_string()
        }
        (ActivationKind::Trial, ActivationOutcome::Expired) => "Trial has expired!".to_string(),
        (ActivationKind::Trial, ActivationOutcome::Failed(status)) => {
            format!("Trial activation failed: {status}")
        }
    }
}
