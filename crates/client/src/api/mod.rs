//! Store API contract.
//!
//! | Action | Method | Path | Body |
//! |---|---|---|---|
//! | List products | GET | `/api/products` | - |
//! | Login | POST | `/api/login` | `{email, password}` |
//! | Create product | POST | `/api/products` | `{name, price}` |
//! | Update product | PUT | `/api/products/{id}` | `{name, price}` |
//! | Delete product | DELETE | `/api/products/{id}` | - |
//!
//! The authenticated session travels as a cookie. No token ever appears in a
//! request body, so implementations must keep a cookie store.

mod http;

pub use http::HttpStoreApi;

use core::fmt;
use std::future::Future;

use secrecy::SecretString;
use shopfront_core::{Product, ProductDraft, ProductId};

use crate::error::ApiError;

/// Login credentials exactly as entered.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    /// Email as typed, unvalidated.
    pub email: String,
    /// Password as typed.
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from raw form input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a create or update request that produced a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the change.
    Applied,
    /// The server answered with an `error` field; the text is shown verbatim.
    Rejected(String),
}

/// Operations the storefront needs from the server.
///
/// [`HttpStoreApi`] is the production implementation. Tests substitute an
/// in-memory fake.
pub trait StoreApi {
    /// Fetch the full product collection.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>>;

    /// Submit credentials. `Ok` means the server answered 2xx.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;

    /// Create a product from a draft.
    fn create_product(
        &self,
        draft: &ProductDraft,
    ) -> impl Future<Output = Result<MutationOutcome, ApiError>>;

    /// Replace the name and price of an existing product.
    fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> impl Future<Output = Result<MutationOutcome, ApiError>>;

    /// Delete a product. `Ok` means the server answered 2xx.
    fn delete_product(&self, id: ProductId) -> impl Future<Output = Result<(), ApiError>>;
}
