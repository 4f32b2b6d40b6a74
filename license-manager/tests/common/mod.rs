//! Shared test helpers for dispatcher tests.

#![allow(dead_code)]

use tracksuite_license::{ActivationScope, AuthorityCall, LicenseAuthority, Status};

/// An authority that records calls and answers with per-call statuses.
#[derive(Debug, Default)]
pub struct RecordingAuthority {
    pub calls: Vec<AuthorityCall>,
    pub failures: Vec<(AuthorityCall, Status)>,
    pub license_genuine: Option<Status>,
    pub expiry: i64,
}

impl RecordingAuthority {
    pub fn new() -> Self {
        Self {
            license_genuine: Some(Status::FAIL),
            ..Self::default()
        }
    }

    /// Makes `call` answer with `status`.
    pub fn failing(call: AuthorityCall, status: Status) -> Self {
        let mut authority = Self::new();
        authority.failures.push((call, status));
        authority
    }

    /// Calls made after the three identity calls.
    pub fn action_calls(&self) -> &[AuthorityCall] {
        &self.calls[3.min(self.calls.len())..]
    }

    pub fn count(&self, call: AuthorityCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    fn answer(&mut self, call: AuthorityCall) -> Status {
        self.calls.push(call);
        self.failures
            .iter()
            .find(|(c, _)| *c == call)
            .map_or(Status::OK, |(_, status)| *status)
    }
}

impl LicenseAuthority for RecordingAuthority {
    fn set_product_data(&mut self, _product_data: &str) -> Status {
        self.answer(AuthorityCall::SetProductData)
    }

    fn set_product_id(&mut self, _product_id: &str, _scope: ActivationScope) -> Status {
        self.answer(AuthorityCall::SetProductId)
    }

    fn set_app_version(&mut self, _version: &str) -> Status {
        self.answer(AuthorityCall::SetAppVersion)
    }

    fn is_license_genuine(&mut self) -> Status {
        self.calls.push(AuthorityCall::IsLicenseGenuine);
        self.license_genuine.unwrap_or(Status::OK)
    }

    fn license_expiry_date(&mut self) -> Result<i64, Status> {
        self.calls.push(AuthorityCall::GetLicenseExpiryDate);
        Ok(self.expiry)
    }

    fn is_trial_genuine(&mut self) -> Status {
        self.answer(AuthorityCall::IsTrialGenuine)
    }

    fn trial_expiry_date(&mut self) -> Result<i64, Status> {
        self.calls.push(AuthorityCall::GetTrialExpiryDate);
        Ok(self.expiry)
    }

    fn set_license_key(&mut self, _key: &str) -> Status {
        self.answer(AuthorityCall::SetLicenseKey)
    }

    fn activate_license(&mut self) -> Status {
        self.answer(AuthorityCall::ActivateLicense)
    }

    fn set_trial_activation_metadata(&mut self, _key: &str, _value: &str) -> Status {
        self.answer(AuthorityCall::SetTrialActivationMetadata)
    }

    fn activate_trial(&mut self) -> Status {
        self.answer(AuthorityCall::ActivateTrial)
    }

    fn deactivate_license(&mut self) -> Status {
        self.answer(AuthorityCall::DeactivateLicense)
    }
}
