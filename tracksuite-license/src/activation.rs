//! License and trial activation, and deactivation.
//!
//! Submitting a key or trial metadata is request setup: if the authority
//! rejects it, the local installation is broken and the error is fatal.
//! The result of the activation itself is a business outcome that the
//! caller reports.

use crate::authority::{AuthorityCall, LicenseAuthority};
use crate::error::{LicenseError, LicenseResult};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info, warn};

/// Which entitlement track an activation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    License,
    Trial,
}

/// A single activation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRequest {
    pub kind: ActivationKind,
    pub key: String,
    /// Trial activation metadata. Ignored for licenses.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ActivationRequest {
    /// A license activation for `key`.
    #[must_use]
    pub fn license(key: impl Into<String>) -> Self {
        Self {
            kind: ActivationKind::License,
            key: key.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// A trial activation for `key` carrying `metadata`.
    #[must_use]
    pub fn trial(key: impl Into<String>, metadata: BTreeMap<String, String>) -> Self {
        Self {
            kind: ActivationKind::Trial,
            key: key.into(),
            metadata,
        }
    }
}

/// The business result of an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOutcome {
    Activated,
    Expired,
    Failed(Status),
}

impl ActivationOutcome {
    /// Returns true if the entitlement is now active.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated)
    }
}

/// Runs an activation request on the track its kind selects.
///
/// # Errors
///
/// Returns [`LicenseError::Channel`] if the key or metadata is rejected.
pub fn activate<A: LicenseAuthority>(
    authority: &mut A,
    request: &ActivationRequest,
) -> LicenseResult<ActivationOutcome> {
    match request.kind {
        ActivationKind::License => activate_license(authority, &request.key),
        ActivationKind::Trial => activate_trial(authority, &request.key, &request.metadata),
    }
}

/// Submits a license key and activates it.
///
/// # Errors
///
/// Returns [`LicenseError::Channel`] if the authority rejects the key
/// submission. A refused activation is an `Ok` outcome.
pub fn activate_license<A: LicenseAuthority>(
    authority: &mut A,
    key: &str,
) -> LicenseResult<ActivationOutcome> {
    submit(AuthorityCall::SetLicenseKey, authority.set_license_key(key))?;

    let outcome = match authority.activate_license() {
        Status::OK => ActivationOutcome::Activated,
        Status::EXPIRED => ActivationOutcome::Expired,
        status => ActivationOutcome::Failed(status),
    };
    log_outcome("license", outcome);
    Ok(outcome)
}

/// Submits a trial key with its metadata and activates the trial.
///
/// Metadata entries are attached in key order.
///
/// # Errors
///
/// Returns [`LicenseError::Channel`] if the key or any metadata entry is
/// rejected. A refused activation is an `Ok` outcome.
pub fn activate_trial<A: LicenseAuthority>(
    authority: &mut A,
    key: &str,
    metadata: &BTreeMap<String, String>,
) -> LicenseResult<ActivationOutcome> {
    submit(AuthorityCall::SetLicenseKey, authority.set_license_key(key))?;

    for (name, value) in metadata {
        submit(
            AuthorityCall::SetTrialActivationMetadata,
            authority.set_trial_activation_metadata(name, value),
        )?;
    }

    let outcome = match authority.activate_trial() {
        Status::OK => ActivationOutcome::Activated,
        Status::TRIAL_EXPIRED => ActivationOutcome::Expired,
        status => ActivationOutcome::Failed(status),
    };
    log_outcome("trial", outcome);
    Ok(outcome)
}

/// Deactivates the license.
///
/// # Errors
///
/// Any non-success status is fatal: the activation is left in an unknown
/// state.
pub fn deactivate<A: LicenseAuthority>(authority: &mut A) -> LicenseResult<()> {
    let status = authority.deactivate_license();
    if !status.is_ok() {
        error!(%status, "deactivation failed");
        return Err(LicenseError::Deactivation { status });
    }
    info!("license deactivated");
    Ok(())
}

fn submit(call: AuthorityCall, status: Status) -> LicenseResult<()> {
    if status.is_ok() {
        return Ok(());
    }
    error!(%call, %status, "activation request rejected");
    Err(LicenseError::Channel { call, status })
}

fn log_outcome(track: &str, outcome: ActivationOutcome) {
    match outcome {
        ActivationOutcome::Activated => info!(track, "activated"),
        ActivationOutcome::Expired => warn!(track, "activation refused: expired"),
        ActivationOutcome::Failed(status) => {
            warn!(track, %status, name = status.name().unwrap_or("unknown"), "activation failed");
        }
    }
}
