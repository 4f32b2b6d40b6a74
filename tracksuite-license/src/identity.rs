//! Product identity and its one-time registration with the authority.

use crate::authority::{ActivationScope, AuthorityCall, LicenseAuthority};
use crate::error::{LicenseError, LicenseResult};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

/// TrackSuite product id issued by the license authority.
pub const PRODUCT_ID: Uuid = uuid::uuid!("74354709-c988-4941-88fc-4e648c6e8402");

/// Signed product data blob issued by the license authority.
pub const PRODUCT_DATA: &str = concat!(
    "MkNGQjNEREQ1QjZGRTc4OEM3RDk2RUNCNkIzQjgxMDE=.KohGT9MxA7p8ufFoSOYXFQNeA+Ytf5p+P1eo42vmVZ1XDMkvEE/",
    "LoT0FddPX6c4kz+ondUjuCkApvuNEpYBL1gfgoqXU+ScNhDiUeAc4mZBmREDGsJRbko6EjBPIXMinGcmq3M6mfd/",
    "M5j5En0PGRSZQaYdAxnHW4rNpDeYxYqbtwJgvFaPRd4sAn5720mo2E6qI6kE5wE1g0LAlFiNn6A0wrxnAEuHgRKy6pQvR4A17isaDvkKsayUCGhH",
    "lInHITzRwnn1DE+1mjD1IGMULciI5oCcOpS+vExyhVnDRHZ76dU4lHGPGiJFt0Z5E9DkoX9mfHhzRl2pdJwBGp7NzkMzxiHgsRgZGN/",
    "hqAN6qD+bYajaGuM97BhlZ+/PX2aDVQE++3VkHodi3nYvu6ebNpXqfqnzjvwDWf1sYthDhNdUSzcRkgGr1MU6wqb31OqVLdDxK792M87/",
    "msL7MZp2UeqN/xFN634z6Y/kGsL26SNl0yq0MjO6ocK4NSKeJC+gqrszCy7MZvtlzNaJOksbxMWl/",
    "acnY0C38PBvCeirdBH+WHVEFh739SZdtGYQJo3KmnjtD6zjMRCCcxjvZqpXQuW/xU3RMxMYAbPdULKvLdmW+z8CazBml/",
    "5bUCmvOwnNCsJGU2m1TjlJlGNTneVnRcyn15AH/9zCydySxW3t3qBgYspcFQ1/8c5/",
    "ryakHQeAMURB221I48UfGcxs1ADOL60Xk9Gum+j1cZoOFQkoLgjE=",
);

/// TrackSuite version reported to the authority.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The immutable identity of the licensed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentity {
    product_id: Uuid,
    product_data: String,
    app_version: String,
    scope: ActivationScope,
}

impl ProductIdentity {
    /// Creates an identity from its parts.
    #[must_use]
    pub fn new(
        product_id: Uuid,
        product_data: impl Into<String>,
        app_version: impl Into<String>,
        scope: ActivationScope,
    ) -> Self {
        Self {
            product_id,
            product_data: product_data.into(),
            app_version: app_version.into(),
            scope,
        }
    }

    /// The identity compiled into this build.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(PRODUCT_ID, PRODUCT_DATA, APP_VERSION, ActivationScope::User)
    }

    /// Returns the product id.
    #[must_use]
    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    /// Returns the signed product data.
    #[must_use]
    pub fn product_data(&self) -> &str {
        &self.product_data
    }

    /// Returns the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Returns the activation scope.
    #[must_use]
    pub fn scope(&self) -> ActivationScope {
        self.scope
    }
}

impl Default for ProductIdentity {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Registers the product identity with the authority.
///
/// Product data must reach the client before the product id, and the app
/// version comes last. The first non-success status stops the sequence.
/// Must run once per process before any other authority call; repeating it
/// reissues the same three calls.
///
/// # Errors
///
/// Returns [`LicenseError::Init`] carrying the failing call and its status.
pub fn initialize<A: LicenseAuthority>(
    authority: &mut A,
    identity: &ProductIdentity,
) -> LicenseResult<()> {
    let product_id = identity.product_id.hyphenated().to_string();

    check(
        AuthorityCall::SetProductData,
        authority.set_product_data(&identity.product_data),
    )?;
    check(
        AuthorityCall::SetProductId,
        authority.set_product_id(&product_id, identity.scope),
    )?;
    check(
        AuthorityCall::SetAppVersion,
        authority.set_app_version(&identity.app_version),
    )?;

    debug!(%product_id, version = %identity.app_version, "product identity configured");
    Ok(())
}

fn check(call: AuthorityCall, status: Status) -> LicenseResult<()> {
    if status.is_ok() {
        Ok(())
    } else {
        error!(%call, %status, "product identity rejected");
        Err(LicenseError::Init { call, status })
    }
}
