//! Shopfront Client - Admin storefront state machine.
//!
//! Lists products, lets an authenticated administrator create, edit, and
//! delete them, and hides the mutating controls until login succeeds.
//!
//! # Architecture
//!
//! - [`api`] - The [`StoreApi`] seam and its `reqwest` implementation
//! - [`state`] - Session gate and create/update edit mode
//! - [`view`] - The [`View`] rendering surface and the headless [`Page`]
//! - [`controller`] - [`Storefront`], which turns [`UiEvent`]s into requests
//!   and view updates
//!
//! The server is reachable only through the HTTP contract in [`api`]. Every
//! mutation is followed by a full list refresh; nothing is cached.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopfront_client::{ClientConfig, HttpStoreApi, Page, Storefront, UiEvent};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let api = HttpStoreApi::new(&config)?;
//! let mut storefront = Storefront::new(api, Page::new());
//! storefront.start().await;
//!
//! storefront.view_mut().type_login("admin@example.com", "hunter2");
//! storefront.dispatch(UiEvent::SubmitLogin).await;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::{Credentials, HttpStoreApi, MutationOutcome, StoreApi};
pub use config::{ClientConfig, ConfigError};
pub use controller::{Storefront, UiEvent};
pub use error::ApiError;
pub use state::{EditMode, EditModeController, Session};
pub use view::{ElementId, ListItem, Listing, Page, Section, View};
