//! In-memory `StoreApi` fake for controller tests.

#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use shopfront_core::{Product, ProductDraft, ProductId};

use crate::api::{Credentials, MutationOutcome, StoreApi};
use crate::controller::Storefront;
use crate::error::ApiError;
use crate::view::Page;

/// A request received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Login(String),
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

/// Catalog-backed fake server.
///
/// Mutations that are not given an explicit reply succeed and are applied to
/// the catalog, so refreshes observe them.
pub struct FakeApi {
    products: RefCell<Vec<Product>>,
    next_id: Cell<i64>,
    list_fails: Cell<bool>,
    accept_login: Cell<bool>,
    delete_ok: Cell<bool>,
    mutation_replies: RefCell<VecDeque<Result<MutationOutcome, ApiError>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            products: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            list_fails: Cell::new(false),
            accept_login: Cell::new(true),
            delete_ok: Cell::new(true),
            mutation_replies: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    pub fn set_list_fails(&self, fails: bool) {
        self.list_fails.set(fails);
    }

    pub fn set_accept_login(&self, accept: bool) {
        self.accept_login.set(accept);
    }

    pub fn set_delete_ok(&self, ok: bool) {
        self.delete_ok.set(ok);
    }

    /// Queue the reply for the next create or update.
    pub fn push_mutation_reply(&self, reply: Result<MutationOutcome, ApiError>) {
        self.mutation_replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::List))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_mutation_reply(&self) -> Result<MutationOutcome, ApiError> {
        self.mutation_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(MutationOutcome::Applied))
    }

    fn unauthorized() -> ApiError {
        ApiError::Status {
            status: 401,
            message: r#"{"error":"Invalid credentials"}"#.to_string(),
        }
    }
}

impl StoreApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(Call::List);
        if self.list_fails.get() {
            return Err(ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(self.products.borrow().clone())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(Call::Login(credentials.email.clone()));
        if self.accept_login.get() {
            Ok(())
        } else {
            Err(Self::unauthorized())
        }
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<MutationOutcome, ApiError> {
        self.record(Call::Create(draft.clone()));
        let reply = self.next_mutation_reply();
        if matches!(reply, Ok(MutationOutcome::Applied)) {
            if let Ok(price) = draft.price.parse() {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                self.products.borrow_mut().push(Product {
                    id: ProductId::new(id),
                    name: draft.name.clone(),
                    price,
                });
            }
        }
        reply
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<MutationOutcome, ApiError> {
        self.record(Call::Update(id, draft.clone()));
        let reply = self.next_mutation_reply();
        if matches!(reply, Ok(MutationOutcome::Applied)) {
            let mut products = self.products.borrow_mut();
            if let Some(existing) = products.iter_mut().find(|p| p.id == id) {
                existing.name.clone_from(&draft.name);
                if let Ok(price) = draft.price.parse() {
                    existing.price = price;
                }
            }
        }
        reply
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.record(Call::Delete(id));
        if !self.delete_ok.get() {
            return Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            });
        }
        self.products.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

/// Build a product from literal parts.
pub fn product(id: i64, name: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: price.parse().unwrap(),
    }
}

/// A controller over a fresh [`Page`].
pub fn storefront(api: FakeApi) -> Storefront<FakeApi, Page> {
    Storefront::new(api, Page::new())
}

/// A started controller that has already logged in.
pub async fn authenticated(api: FakeApi) -> Storefront<FakeApi, Page> {
    let mut sf = storefront(api);
    sf.start().await;
    sf.login(Credentials::new("adminpro@gmail.com", "hola")).await;
    sf
}
