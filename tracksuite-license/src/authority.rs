//! The license authority seam.
//!
//! The authority is the vendor backend that validates entitlements. The
//! lifecycle manager only sequences its calls and interprets the status codes
//! it returns; it never looks inside.

use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an activation is stored by the authority client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationScope {
    /// Per-user activation data.
    #[default]
    User,
    /// Machine-wide activation data (requires elevated rights).
    System,
}

impl ActivationScope {
    /// Flag value understood by the vendor client.
    #[must_use]
    pub const fn flag(&self) -> u32 {
        match self {
            Self::User => 1,
            Self::System => 2,
        }
    }
}

/// Client for the external license authority.
///
/// Every method is one blocking round trip. Implementations own whatever
/// process-wide state the vendor client keeps; callers thread a single
/// handle through every component for the lifetime of the process.
pub trait LicenseAuthority {
    /// Sets the signed product data (embedded public key material).
    fn set_product_data(&mut self, product_data: &str) -> Status;

    /// Sets the product id and activation scope.
    fn set_product_id(&mut self, product_id: &str, scope: ActivationScope) -> Status;

    /// Sets the application version.
    fn set_app_version(&mut self, version: &str) -> Status;

    /// Checks whether the license is activated and genuine.
    fn is_license_genuine(&mut self) -> Status;

    /// Returns the license expiry as seconds since the Unix epoch.
    fn license_expiry_date(&mut self) -> Result<i64, Status>;

    /// Checks whether the trial is activated and genuine.
    fn is_trial_genuine(&mut self) -> Status;

    /// Returns the trial expiry as seconds since the Unix epoch.
    fn trial_expiry_date(&mut self) -> Result<i64, Status>;

    /// Submits a license (or trial) key.
    fn set_license_key(&mut self, key: &str) -> Status;

    /// Activates the submitted license key.
    fn activate_license(&mut self) -> Status;

    /// Attaches one metadata entry to the next trial activation.
    fn set_trial_activation_metadata(&mut self, key: &str, value: &str) -> Status;

    /// Activates the trial.
    fn activate_trial(&mut self) -> Status;

    /// Deactivates the license, freeing the activation slot.
    fn deactivate_license(&mut self) -> Status;
}

/// Names of the authority calls, as the vendor spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorityCall {
    SetProductData,
    SetProductId,
    SetAppVersion,
    IsLicenseGenuine,
    GetLicenseExpiryDate,
    IsTrialGenuine,
    GetTrialExpiryDate,
    SetLicenseKey,
    ActivateLicense,
    SetTrialActivationMetadata,
    ActivateTrial,
    DeactivateLicense,
}

impl AuthorityCall {
    /// Returns the vendor function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetProductData => "SetProductData",
            Self::SetProductId => "SetProductId",
            Self::SetAppVersion => "SetAppVersion",
            Self::IsLicenseGenuine => "IsLicenseGenuine",
            Self::GetLicenseExpiryDate => "GetLicenseExpiryDate",
            Self::IsTrialGenuine => "IsTrialGenuine",
            Self::GetTrialExpiryDate => "GetTrialExpiryDate",
            Self::SetLicenseKey => "SetLicenseKey",
            Self::ActivateLicense => "ActivateLicense",
            Self::SetTrialActivationMetadata => "SetTrialActivationMetadata",
            Self::ActivateTrial => "ActivateTrial",
            Self::DeactivateLicense => "DeactivateLicense",
        }
    }
}

impl fmt::Display for AuthorityCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
