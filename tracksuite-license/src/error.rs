//! Error types for the licensing module.
//!
//! Only unrecoverable setup failures are errors. Activation outcomes and
//! status diagnostics are ordinary return values.

use crate::authority::AuthorityCall;
use crate::status::Status;
use thiserror::Error;

/// Fatal licensing errors. The process must stop and exit with
/// [`LicenseError::exit_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LicenseError {
    /// Product identity could not be configured.
    #[error("{call} failed: {status}")]
    Init { call: AuthorityCall, status: Status },

    /// A key or metadata submission was rejected.
    #[error("{call} failed: {status}")]
    Channel { call: AuthorityCall, status: Status },

    /// Deactivation did not complete.
    #[error("DeactivateLicense failed: {status}")]
    Deactivation { status: Status },
}

impl LicenseError {
    /// Returns the authority status that caused the failure.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Init { status, .. }
            | Self::Channel { status, .. }
            | Self::Deactivation { status } => *status,
        }
    }

    /// Returns the authority call that failed.
    #[must_use]
    pub const fn call(&self) -> AuthorityCall {
        match self {
            Self::Init { call, .. } | Self::Channel { call, .. } => *call,
            Self::Deactivation { .. } => AuthorityCall::DeactivateLicense,
        }
    }

    /// Process exit code: the raw authority status.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.status().code()
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
