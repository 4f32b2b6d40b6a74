//! Shared test helpers for license tests.

#![allow(dead_code)]

use tracksuite_license::{ActivationScope, AuthorityCall, LicenseAuthority, Status};

/// Fixed clock reading used by evaluation tests.
pub const NOW: i64 = 1_700_000_000;

/// An authority that answers from a script and records every call.
#[derive(Debug, Clone)]
pub struct ScriptedAuthority {
    pub product_data: Status,
    pub product_id: Status,
    pub app_version: Status,
    pub license_genuine: Status,
    pub license_expiry: Result<i64, Status>,
    pub trial_genuine: Status,
    pub trial_expiry: Result<i64, Status>,
    pub license_key: Status,
    pub activate_license: Status,
    pub trial_metadata: Status,
    pub activate_trial: Status,
    pub deactivate: Status,
    pub calls: Vec<AuthorityCall>,
    pub submitted_keys: Vec<String>,
    pub submitted_metadata: Vec<(String, String)>,
    pub scopes: Vec<ActivationScope>,
}

impl Default for ScriptedAuthority {
    fn default() -> Self {
        Self {
            product_data: Status::OK,
            product_id: Status::OK,
            app_version: Status::OK,
            license_genuine: Status::FAIL,
            license_expiry: Ok(NOW),
            trial_genuine: Status::FAIL,
            trial_expiry: Ok(NOW),
            license_key: Status::OK,
            activate_license: Status::OK,
            trial_metadata: Status::OK,
            activate_trial: Status::OK,
            deactivate: Status::OK,
            calls: Vec::new(),
            submitted_keys: Vec::new(),
            submitted_metadata: Vec::new(),
            scopes: Vec::new(),
        }
    }
}

impl ScriptedAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Genuine license expiring `secs_left` seconds after [`NOW`].
    pub fn genuine_license(secs_left: i64) -> Self {
        Self {
            license_genuine: Status::OK,
            license_expiry: Ok(NOW + secs_left),
            ..Self::default()
        }
    }

    /// No license, genuine trial expiring `secs_left` seconds after [`NOW`].
    pub fn genuine_trial(secs_left: i64) -> Self {
        Self {
            trial_genuine: Status::OK,
            trial_expiry: Ok(NOW + secs_left),
            ..Self::default()
        }
    }

    pub fn count(&self, call: AuthorityCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    fn record(&mut self, call: AuthorityCall, status: Status) -> Status {
        self.calls.push(call);
        status
    }
}

impl LicenseAuthority for ScriptedAuthority {
    fn set_product_data(&mut self, _product_data: &str) -> Status {
        self.record(AuthorityCall::SetProductData, self.product_data)
    }

    fn set_product_id(&mut self, _product_id: &str, scope: ActivationScope) -> Status {
        self.scopes.push(scope);
        self.record(AuthorityCall::SetProductId, self.product_id)
    }

    fn set_app_version(&mut self, _version: &str) -> Status {
        self.record(AuthorityCall::SetAppVersion, self.app_version)
    }

    fn is_license_genuine(&mut self) -> Status {
        self.record(AuthorityCall::IsLicenseGenuine, self.license_genuine)
    }

    fn license_expiry_date(&mut self) -> Result<i64, Status> {
        self.calls.push(AuthorityCall::GetLicenseExpiryDate);
        self.license_expiry
    }

    fn is_trial_genuine(&mut self) -> Status {
        self.record(AuthorityCall::IsTrialGenuine, self.trial_genuine)
    }

    fn trial_expiry_date(&mut self) -> Result<i64, Status> {
        self.calls.push(AuthorityCall::GetTrialExpiryDate);
        self.trial_expiry
    }

    fn set_license_key(&mut self, key: &str) -> Status {
        self.submitted_keys.push(key.to_string());
        self.record(AuthorityCall::SetLicenseKey, self.license_key)
    }

    fn activate_license(&mut self) -> Status {
        self.record(AuthorityCall::ActivateLicense, self.activate_license)
    }

    fn set_trial_activation_metadata(&mut self, key: &str, value: &str) -> Status {
        self.submitted_metadata
            .push((key.to_string(), value.to_string()));
        self.record(AuthorityCall::SetTrialActivationMetadata, self.trial_metadata)
    }

    fn activate_trial(&mut self) -> Status {
        self.record(AuthorityCall::ActivateTrial, self.activate_trial)
    }

    fn deactivate_license(&mut self) -> Status {
        self.record(AuthorityCall::DeactivateLicense, self.deactivate)
    }
}
