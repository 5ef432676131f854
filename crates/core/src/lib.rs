//! Shopfront Core - Shared domain types.
//!
//! This crate provides the types shared by every Shopfront component:
//! - `client` - Session/edit-mode state machine and HTTP client
//! - `cli` - Interactive terminal front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps it
//! lightweight and allows it to be used anywhere, including test doubles.
//!
//! # Modules
//!
//! - [`types`] - Type-safe product IDs, prices, and product payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
