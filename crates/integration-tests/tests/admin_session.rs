//! Login and session behaviour against a mock store API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use serde_json::json;
use shopfront_client::view::text;
use shopfront_client::{ElementId, ListItem, Section, UiEvent};
use shopfront_core::ProductDraft;
use shopfront_integration_tests::{Catalog, mount_login_ok, request_count, storefront};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn widget() -> serde_json::Value {
    json!({"id": 1, "name": "Widget", "price": 9.99})
}

#[tokio::test]
async fn test_anonymous_visitor_sees_list_without_controls() {
    let server = MockServer::start().await;
    Catalog::new(vec![widget()]).mount(&server).await;

    let mut sf = storefront(&server);
    sf.start().await;

    let items = sf.view().listing().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text(), "Widget - $9.99");
    assert!(items[0].controls().is_empty());
    assert_eq!(sf.view().section(), Section::Login);
    assert!(!sf.view().is_visible(ElementId::ProductForm));
}

#[tokio::test]
async fn test_rejected_login_shows_invalid_credentials() {
    let server = MockServer::start().await;
    Catalog::new(vec![widget()]).mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "wrong"})))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut sf = storefront(&server);
    sf.start().await;
    sf.view_mut().type_login("a@b.com", "wrong");
    let submit = sf.view().click(ElementId::LoginForm).unwrap();
    sf.dispatch(submit).await;

    assert!(!sf.session().is_authenticated());
    assert_eq!(sf.view().login_message(), text::INVALID_CREDENTIALS);
    assert_eq!(sf.view().section(), Section::Login);
    assert!(!sf.view().is_visible(ElementId::AdminSection));
}

#[tokio::test]
async fn test_successful_login_reveals_admin_controls() {
    let server = MockServer::start().await;
    Catalog::new(vec![widget()]).mount(&server).await;
    mount_login_ok(&server, "abc123").await;

    let mut sf = storefront(&server);
    sf.start().await;
    sf.view_mut().type_login("adminpro@gmail.com", "hola");
    sf.dispatch(UiEvent::SubmitLogin).await;

    assert!(sf.session().is_authenticated());
    assert_eq!(sf.view().section(), Section::Admin);
    assert!(sf.view().is_visible(ElementId::ProductForm));
    assert!(!sf.view().is_visible(ElementId::LoginSection));
    assert_eq!(sf.view().login_message(), "");

    match &sf.view().listing().items()[0] {
        ListItem::Product { controls, .. } => {
            let labels: Vec<_> = controls.iter().map(|c| c.label()).collect();
            assert_eq!(labels, vec![text::EDIT_LABEL, text::DELETE_LABEL]);
        }
        other => panic!("expected a product entry, got {other:?}"),
    }

    // Initial load plus the post-login refresh.
    assert_eq!(request_count(&server, "GET", "/api/products").await, 2);
}

#[tokio::test]
async fn test_session_cookie_is_sent_with_mutations() {
    let server = MockServer::start().await;
    let catalog = Catalog::new(vec![widget()]);
    catalog.mount(&server).await;
    mount_login_ok(&server, "abc123").await;

    let created = catalog.clone();
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(header("cookie", "session=abc123"))
        .respond_with(move |_: &wiremock::Request| {
            let product = json!({"id": 2, "name": "Gadget", "price": 3});
            created.insert(product.clone());
            ResponseTemplate::new(201)
                .set_body_json(json!({"message": "Product created", "product": product}))
        })
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&server)
        .await;

    let mut sf = storefront(&server);
    sf.start().await;
    sf.view_mut().type_login("adminpro@gmail.com", "hola");
    sf.dispatch(UiEvent::SubmitLogin).await;

    sf.view_mut().type_product("Gadget", "3");
    sf.dispatch(UiEvent::SubmitProduct).await;

    assert_eq!(sf.view().form_message(), "");
    let texts: Vec<_> = sf.view().listing().items().iter().map(ListItem::text).collect();
    assert_eq!(texts, vec!["Widget - $9.99", "Gadget - $3"]);
}

#[tokio::test]
async fn test_mutation_without_session_shows_server_error() {
    let server = MockServer::start().await;
    Catalog::default().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&server)
        .await;

    let mut sf = storefront(&server);
    sf.start().await;
    sf.submit_product(ProductDraft::new("Widget", "9.99")).await;

    assert_eq!(sf.view().form_message(), "Unauthorized");
    assert_eq!(request_count(&server, "GET", "/api/products").await, 1);
}
