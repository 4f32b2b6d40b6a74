//! License lifecycle management for TrackSuite.
//!
//! This crate handles:
//! - Registering the product identity with the license authority
//! - Evaluating license and trial state into a single [`LicenseState`]
//! - Activating licenses and trials, and deactivating licenses
//!
//! # Design Principles
//!
//! - **Black-box authority**: the vendor backend sits behind
//!   [`LicenseAuthority`]; this crate only sequences calls and interprets
//!   status codes
//! - **License before trial**: a genuine license always wins; the trial is
//!   only checked when the license check reaches no decision
//! - **No exits in the core**: fatal conditions come back as
//!   [`LicenseError`] and the binary decides how to terminate
//!
//! # Status Precedence
//!
//! | License check        | Result              |
//! |----------------------|---------------------|
//! | OK                   | `Genuine`           |
//! | EXPIRED              | `Expired`           |
//! | SUSPENDED            | `Suspended`         |
//! | GRACE_PERIOD_OVER    | `GracePeriodOver`   |
//! | E_PRODUCT_ID         | `ProductIdInvalid`  |
//! | anything else        | trial check         |

mod activation;
mod authority;
mod device;
mod error;
mod evaluator;
mod identity;
mod status;

#[cfg(feature = "lexactivator")]
mod lexactivator;

pub use activation::{
    activate, activate_license, activate_trial, deactivate, ActivationKind, ActivationOutcome,
    ActivationRequest,
};
pub use authority::{ActivationScope, AuthorityCall, LicenseAuthority};
pub use device::DeviceInfo;
pub use error::{LicenseError, LicenseResult};
pub use evaluator::{
    evaluate, evaluate_at, Evaluation, LicenseState, RemainingTime, TimeLeft, SECS_PER_DAY,
    SECS_PER_HOUR, TRIAL_HOURS_THRESHOLD_SECS,
};
pub use identity::{initialize, ProductIdentity, APP_VERSION, PRODUCT_DATA, PRODUCT_ID};
pub use status::Status;

#[cfg(feature = "lexactivator")]
pub use lexactivator::LexActivator;
