//! Status codes returned by the license authority.
//!
//! Every authority call answers with an integer code. `0` is the single
//! success value; every other value is a distinct failure or condition.
//! Codes the lifecycle manager does not interpret are preserved verbatim
//! so they can be surfaced to the operator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw status code reported by the license authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(i32);

impl Status {
    /// Success.
    pub const OK: Self = Self(0);
    /// Generic failure.
    pub const FAIL: Self = Self(1);
    /// The license is activated but has expired.
    pub const EXPIRED: Self = Self(20);
    /// The license is activated but has been suspended.
    pub const SUSPENDED: Self = Self(21);
    /// The grace period for server sync is over.
    pub const GRACE_PERIOD_OVER: Self = Self(22);
    /// The trial has expired or its activation was deleted on the server.
    pub const TRIAL_EXPIRED: Self = Self(25);
    /// The local trial has expired.
    pub const LOCAL_TRIAL_EXPIRED: Self = Self(26);
    /// Invalid product data.
    pub const E_PRODUCT_DATA: Self = Self(42);
    /// Invalid product id.
    pub const E_PRODUCT_ID: Self = Self(43);
    /// App version exceeds the allowed length.
    pub const E_APP_VERSION_LENGTH: Self = Self(52);
    /// The license has been revoked.
    pub const E_REVOKED: Self = Self(53);
    /// Invalid license key.
    pub const E_LICENSE_KEY: Self = Self(54);
    /// The activation limit for the license has been reached.
    pub const E_ACTIVATION_LIMIT: Self = Self(58);
    /// The activation has been deleted on the server.
    pub const E_ACTIVATION_NOT_FOUND: Self = Self(59);
    /// Trial not allowed for the product.
    pub const E_TRIAL_NOT_ALLOWED: Self = Self(61);
    /// Metadata key exceeds the allowed length.
    pub const E_METADATA_KEY_LENGTH: Self = Self(64);
    /// Metadata value exceeds the allowed length.
    pub const E_METADATA_VALUE_LENGTH: Self = Self(65);
    /// Trial activation metadata limit reached.
    pub const E_TRIAL_ACTIVATION_METADATA_LIMIT: Self = Self(67);

    /// Wraps a raw code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.0
    }

    /// Returns true for the reserved success value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.0 == Self::OK.0
    }

    /// Symbolic name of the code, if it is one the manager knows.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::OK => "LA_OK",
            Self::FAIL => "LA_FAIL",
            Self::EXPIRED => "LA_EXPIRED",
            Self::SUSPENDED => "LA_SUSPENDED",
            Self::GRACE_PERIOD_OVER => "LA_GRACE_PERIOD_OVER",
            Self::TRIAL_EXPIRED => "LA_TRIAL_EXPIRED",
            Self::LOCAL_TRIAL_EXPIRED => "LA_LOCAL_TRIAL_EXPIRED",
            Self::E_PRODUCT_DATA => "LA_E_PRODUCT_DATA",
            Self::E_PRODUCT_ID => "LA_E_PRODUCT_ID",
            Self::E_APP_VERSION_LENGTH => "LA_E_APP_VERSION_LENGTH",
            Self::E_REVOKED => "LA_E_REVOKED",
            Self::E_LICENSE_KEY => "LA_E_LICENSE_KEY",
            Self::E_ACTIVATION_LIMIT => "LA_E_ACTIVATION_LIMIT",
            Self::E_ACTIVATION_NOT_FOUND => "LA_E_ACTIVATION_NOT_FOUND",
            Self::E_TRIAL_NOT_ALLOWED => "LA_E_TRIAL_NOT_ALLOWED",
            Self::E_METADATA_KEY_LENGTH => "LA_E_METADATA_KEY_LENGTH",
            Self::E_METADATA_VALUE_LENGTH => "LA_E_METADATA_VALUE_LENGTH",
            Self::E_TRIAL_ACTIVATION_METADATA_LIMIT => "LA_E_TRIAL_ACTIVATION_METADATA_LIMIT",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

// Operators see the bare number, matching the vendor's documentation.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
