//! Reduction of authority responses into a single license state.
//!
//! The license track is consulted first. Only when it reaches no decision is
//! the trial track consulted. Each track costs one round trip, plus one more
//! for the expiry date when the entitlement is genuine.

use crate::authority::LicenseAuthority;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Seconds in an hour.
pub const SECS_PER_HOUR: u64 = 60 * 60;

/// Seconds in a day.
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Below this many seconds, trial time is reported in hours instead of days.
pub const TRIAL_HOURS_THRESHOLD_SECS: u64 = SECS_PER_DAY;

/// The entitlement state at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseState {
    /// License is activated and valid.
    Genuine,
    /// License is activated but expired.
    Expired,
    /// License is activated but suspended.
    Suspended,
    /// License is activated but needs a server sync.
    GracePeriodOver,
    /// The configured product id does not match the license.
    ProductIdInvalid,
    /// Trial is activated and valid.
    TrialGenuine,
    /// Trial has expired.
    TrialExpired,
    /// Neither a license nor a trial was found.
    NotFound {
        /// Status of the license check, kept for diagnostics.
        status: Status,
    },
}

impl LicenseState {
    /// Returns true if the entitlement allows running the application.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Genuine | Self::TrialGenuine)
    }
}

/// Time left until an entitlement expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RemainingTime {
    total_seconds: u64,
}

impl RemainingTime {
    /// Nothing left.
    pub const ZERO: Self = Self { total_seconds: 0 };

    /// Creates a remaining time from a second count.
    #[must_use]
    pub const fn from_secs(total_seconds: u64) -> Self {
        Self { total_seconds }
    }

    /// Time from `now` until `expiry`, both in Unix seconds. A past expiry
    /// yields zero.
    #[must_use]
    pub fn until(expiry: i64, now: i64) -> Self {
        let secs = expiry.saturating_sub(now);
        Self::from_secs(u64::try_from(secs).unwrap_or(0))
    }

    /// Total seconds left.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Whole hours left.
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.total_seconds / SECS_PER_HOUR
    }

    /// Whole days left.
    #[must_use]
    pub const fn days(&self) -> u64 {
        self.total_seconds / SECS_PER_DAY
    }
}

/// How remaining time is presented to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLeft {
    /// License time: always both units.
    HoursAndDays { hours: u64, days: u64 },
    /// Trial time under a day.
    Hours(u64),
    /// Trial time of a day or more.
    Days(u64),
}

impl TimeLeft {
    /// License presentation.
    #[must_use]
    pub fn for_license(remaining: RemainingTime) -> Self {
        Self::HoursAndDays {
            hours: remaining.hours(),
            days: remaining.days(),
        }
    }

    /// Trial presentation, switched on [`TRIAL_HOURS_THRESHOLD_SECS`].
    #[must_use]
    pub fn for_trial(remaining: RemainingTime) -> Self {
        if remaining.total_seconds() < TRIAL_HOURS_THRESHOLD_SECS {
            Self::Hours(remaining.hours())
        } else {
            Self::Days(remaining.days())
        }
    }
}

/// The result of one status evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The single state that holds.
    pub state: LicenseState,
    /// Time left, for usable states only.
    pub remaining: Option<RemainingTime>,
    /// Presentation of `remaining`.
    pub time_left: Option<TimeLeft>,
}

impl Evaluation {
    fn terminal(state: LicenseState) -> Self {
        Self {
            state,
            remaining: None,
            time_left: None,
        }
    }

    /// Returns true if the entitlement allows running the application.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.state.is_usable()
    }
}

/// Evaluates the entitlement against the current wall clock.
pub fn evaluate<A: LicenseAuthority>(authority: &mut A) -> Evaluation {
    evaluate_at(authority, chrono::Utc::now().timestamp())
}

/// Evaluates the entitlement with `now` given in Unix seconds.
pub fn evaluate_at<A: LicenseAuthority>(authority: &mut A, now: i64) -> Evaluation {
    let license_status = authority.is_license_genuine();
    debug!(status = %license_status, "license check");

    let state = match license_status {
        Status::OK => {
            let expiry = authority.license_expiry_date().unwrap_or_else(|status| {
                warn!(%status, "license expiry date unavailable");
                now
            });
            let remaining = RemainingTime::until(expiry, now);
            return Evaluation {
                state: LicenseState::Genuine,
                remaining: Some(remaining),
                time_left: Some(TimeLeft::for_license(remaining)),
            };
        }
        Status::EXPIRED => LicenseState::Expired,
        Status::SUSPENDED => LicenseState::Suspended,
        Status::GRACE_PERIOD_OVER => LicenseState::GracePeriodOver,
        Status::E_PRODUCT_ID => LicenseState::ProductIdInvalid,
        _ => return evaluate_trial(authority, license_status, now),
    };
    Evaluation::terminal(state)
}

fn evaluate_trial<A: LicenseAuthority>(
    authority: &mut A,
    license_status: Status,
    now: i64,
) -> Evaluation {
    let trial_status = authority.is_trial_genuine();
    debug!(status = %trial_status, "trial check");

    match trial_status {
        Status::OK => {
            let expiry = authority.trial_expiry_date().unwrap_or_else(|status| {
                warn!(%status, "trial expiry date unavailable");
                now
            });
            let remaining = RemainingTime::until(expiry, now);
            Evaluation {
                state: LicenseState::TrialGenuine,
                remaining: Some(remaining),
                time_left: Some(TimeLeft::for_trial(remaining)),
            }
        }
        Status::TRIAL_EXPIRED => Evaluation::terminal(LicenseState::TrialExpired),
        _ => {
            debug!(license = %license_status, trial = %trial_status, "no entitlement found");
            Evaluation::terminal(LicenseState::NotFound {
                status: license_status,
            })
        }
    }
}
