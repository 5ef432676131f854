//! `reqwest` implementation of [`StoreApi`].

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use shopfront_core::{Product, ProductDraft, ProductId};
use tracing::instrument;
use url::Url;

use super::{Credentials, MutationOutcome, StoreApi};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Collection endpoint, relative to the configured origin.
const PRODUCTS_PATH: &str = "api/products";

/// Login endpoint, relative to the configured origin.
const LOGIN_PATH: &str = "api/login";

/// HTTP client for the store API.
///
/// Cheaply cloneable. Clones share one cookie store, and therefore one
/// server-side session.
#[derive(Clone)]
pub struct HttpStoreApi {
    inner: Arc<HttpStoreApiInner>,
}

struct HttpStoreApiInner {
    client: reqwest::Client,
    base_url: Url,
}

/// Wire body for `POST /api/login`.
#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl HttpStoreApi {
    /// Create a new client with an empty cookie store.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(HttpStoreApiInner {
                client: builder.build()?,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Get the configured API origin.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    fn product_endpoint(&self, id: ProductId) -> Result<Url, ApiError> {
        self.endpoint(&format!("{PRODUCTS_PATH}/{id}"))
    }

    /// Turn a non-success response into `ApiError::Status`.
    async fn status_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ApiError::Status { status, message }
    }

    /// Interpret a create/update response.
    ///
    /// The status code is not consulted: validation failures and
    /// authorization failures both arrive as objects with an `error` field.
    async fn mutation_outcome(response: reqwest::Response) -> Result<MutationOutcome, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            ApiError::Parse(format!("status {status}: response is not JSON: {e}"))
        })?;

        if !value.is_object() {
            return Err(ApiError::Parse(format!(
                "status {status}: expected a JSON object"
            )));
        }

        Ok(error_message(&value).map_or(MutationOutcome::Applied, MutationOutcome::Rejected))
    }
}

impl StoreApi for HttpStoreApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        let response = self.inner.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse product list: {e}")))
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.endpoint(LOGIN_PATH)?;
        let body = LoginBody {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        };
        let response = self.inner.client.post(url).json(&body).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::status_error(response).await)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_product(&self, draft: &ProductDraft) -> Result<MutationOutcome, ApiError> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        let response = self.inner.client.post(url).json(draft).send().await?;
        Self::mutation_outcome(response).await
    }

    #[instrument(skip(self, draft), fields(id = %id, name = %draft.name))]
    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<MutationOutcome, ApiError> {
        let url = self.product_endpoint(id)?;
        let response = self.inner.client.put(url).json(draft).send().await?;
        Self::mutation_outcome(response).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.product_endpoint(id)?;
        let response = self.inner.client.delete(url).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::status_error(response).await)
    }
}

/// Extract the `error` field if it is set to a truthy value.
///
/// Strings are returned as-is; any other truthy JSON value is returned in its
/// JSON text form.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
