//! Integration tests for Shopfront.
//!
//! The tests in `tests/` drive a real [`Storefront`] with the real
//! [`HttpStoreApi`] against a `wiremock` server that stands in for the store
//! API. [`Catalog`] gives that server a mutable product collection so list
//! refreshes observe earlier mutations.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use shopfront_client::{ClientConfig, HttpStoreApi, Page, Storefront};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Controller type under test.
pub type TestStorefront = Storefront<HttpStoreApi, Page>;

/// Product collection served by the mock server.
#[derive(Clone, Default)]
pub struct Catalog {
    products: Arc<Mutex<Vec<Value>>>,
}

impl Catalog {
    /// Create a catalog from `{id, name, price}` objects.
    #[must_use]
    pub fn new(products: Vec<Value>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// Current collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Value> {
        self.products.lock().expect("catalog lock").clone()
    }

    /// Append a product.
    pub fn insert(&self, product: Value) {
        self.products.lock().expect("catalog lock").push(product);
    }

    /// Replace fields of the product with `id`. Returns `false` if absent.
    pub fn update(&self, id: i64, name: &str, price: f64) -> bool {
        let mut products = self.products.lock().expect("catalog lock");
        match products.iter_mut().find(|p| p["id"] == json!(id)) {
            Some(product) => {
                product["name"] = json!(name);
                product["price"] = json!(price);
                true
            }
            None => false,
        }
    }

    /// Remove the product with `id`. Returns `false` if absent.
    pub fn remove(&self, id: i64) -> bool {
        let mut products = self.products.lock().expect("catalog lock");
        let before = products.len();
        products.retain(|p| p["id"] != json!(id));
        products.len() != before
    }

    /// Serve `GET /api/products` and `DELETE /api/products/{id}` from this
    /// catalog.
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ListResponder(self.clone()))
            .mount(server)
            .await;

        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/products/\d+$"))
            .respond_with(DeleteResponder(self.clone()))
            .mount(server)
            .await;
    }
}

struct ListResponder(Catalog);

impl Respond for ListResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(self.0.snapshot())
    }
}

struct DeleteResponder(Catalog);

impl Respond for DeleteResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let removed = product_id_from_path(request).is_some_and(|id| self.0.remove(id));
        if removed {
            ResponseTemplate::new(200).set_body_json(json!({"message": "Product deleted"}))
        } else {
            ResponseTemplate::new(404).set_body_string("Not Found")
        }
    }
}

/// Trailing `{id}` segment of an item endpoint request.
#[must_use]
pub fn product_id_from_path(request: &Request) -> Option<i64> {
    request
        .url
        .path_segments()?
        .next_back()
        .and_then(|segment| segment.parse().ok())
}

/// Parse a JSON request body.
#[must_use]
pub fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap_or(Value::Null)
}

/// A controller pointed at `server`, with a fresh cookie store and page.
#[must_use]
pub fn storefront(server: &MockServer) -> TestStorefront {
    let config = ClientConfig::new(&server.uri()).expect("mock server URI");
    let api = HttpStoreApi::new(&config).expect("HTTP client");
    Storefront::new(api, Page::new())
}

/// Accept any login and hand out a session cookie.
pub async fn mount_login_ok(server: &MockServer, session_cookie: &str) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("session={session_cookie}; Path=/"))
                .set_body_json(json!({"message": "Login successful"})),
        )
        .mount(server)
        .await;
}

/// A controller that has loaded the list and logged in.
pub async fn logged_in(server: &MockServer) -> TestStorefront {
    mount_login_ok(server, "admin-session").await;

    let mut sf = storefront(server);
    sf.start().await;
    sf.view_mut().type_login("adminpro@gmail.com", "hola");
    sf.dispatch(shopfront_client::UiEvent::SubmitLogin).await;
    assert!(sf.session().is_authenticated(), "login should succeed");
    sf
}

/// Number of requests the server received with `verb` on `route`.
pub async fn request_count(server: &MockServer, verb: &str, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == verb && r.url.path() == route)
        .count()
}
