//! [`LicenseAuthority`] backed by the LexActivator C library.
//!
//! LexActivator keeps its state in process-wide globals. Only one
//! [`LexActivator`] handle should exist per process.

use crate::authority::{ActivationScope, LicenseAuthority};
use crate::status::Status;
use std::ffi::{CString, c_char, c_int};
use std::marker::PhantomData;
use tracing::warn;

#[link(name = "LexActivator")]
unsafe extern "C" {
    fn SetProductData(product_data: *const c_char) -> c_int;
    fn SetProductId(product_id: *const c_char, flags: u32) -> c_int;
    fn SetAppVersion(app_version: *const c_char) -> c_int;
    fn IsLicenseGenuine() -> c_int;
    fn GetLicenseExpiryDate(expiry_date: *mut u32) -> c_int;
    fn IsTrialGenuine() -> c_int;
    fn GetTrialExpiryDate(trial_expiry_date: *mut u32) -> c_int;
    fn SetLicenseKey(license_key: *const c_char) -> c_int;
    fn ActivateLicense() -> c_int;
    fn SetTrialActivationMetadata(key: *const c_char, value: *const c_char) -> c_int;
    fn ActivateTrial() -> c_int;
    fn DeactivateLicense() -> c_int;
}

/// Handle to the process-wide LexActivator client.
#[derive(Debug, Default)]
pub struct LexActivator {
    // The vendor client is not thread-safe.
    _not_send: PhantomData<*const ()>,
}

impl LexActivator {
    /// Creates the handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Converts an argument for the C API. Strings with interior NUL bytes
/// cannot be passed and are reported as a generic failure.
fn c_string(value: &str) -> Result<CString, Status> {
    CString::new(value).map_err(|_| {
        warn!("argument contains a NUL byte");
        Status::FAIL
    })
}

fn with_c_str(value: &str, call: impl FnOnce(*const c_char) -> c_int) -> Status {
    match c_string(value) {
        Ok(s) => Status::from_code(call(s.as_ptr())),
        Err(status) => status,
    }
}

fn read_date(call: impl FnOnce(*mut u32) -> c_int) -> Result<i64, Status> {
    let mut date: u32 = 0;
    let status = Status::from_code(call(&mut date));
    if status.is_ok() {
        Ok(i64::from(date))
    } else {
        Err(status)
    }
}

// SAFETY (all calls below): every pointer passed is either a live `CString`
// borrowed for the duration of the call or a pointer to a local `u32`.
impl LicenseAuthority for LexActivator {
    fn set_product_data(&mut self, product_data: &str) -> Status {
        with_c_str(product_data, |p| unsafe { SetProductData(p) })
    }

    fn set_product_id(&mut self, product_id: &str, scope: ActivationScope) -> Status {
        with_c_str(product_id, |p| unsafe { SetProductId(p, scope.flag()) })
    }

    fn set_app_version(&mut self, version: &str) -> Status {
        with_c_str(version, |p| unsafe { SetAppVersion(p) })
    }

    fn is_license_genuine(&mut self) -> Status {
        Status::from_code(unsafe { IsLicenseGenuine() })
    }

    fn license_expiry_date(&mut self) -> Result<i64, Status> {
        read_date(|p| unsafe { GetLicenseExpiryDate(p) })
    }

    fn is_trial_genuine(&mut self) -> Status {
        Status::from_code(unsafe { IsTrialGenuine() })
    }

    fn trial_expiry_date(&mut self) -> Result<i64, Status> {
        read_date(|p| unsafe { GetTrialExpiryDate(p) })
    }

    fn set_license_key(&mut self, key: &str) -> Status {
        with_c_str(key, |p| unsafe { SetLicenseKey(p) })
    }

    fn activate_license(&mut self) -> Status {
        Status::from_code(unsafe { ActivateLicense() })
    }

    fn set_trial_activation_metadata(&mut self, key: &str, value: &str) -> Status {
        let (key, value) = match (c_string(key), c_string(value)) {
            (Ok(key), Ok(value)) => (key, value),
            (Err(status), _) | (_, Err(status)) => return status,
        };
        Status::from_code(unsafe { SetTrialActivationMetadata(key.as_ptr(), value.as_ptr()) })
    }

    fn activate_trial(&mut self) -> Status {
        Status::from_code(unsafe { ActivateTrial() })
    }

    fn deactivate_license(&mut self) -> Status {
        Status::from_code(unsafe { DeactivateLicense() })
    }
}
