//! Product payloads exchanged with the store API.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
}

impl Product {
    /// Human-readable list label, e.g. `Widget - $9.99`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

/// Create/update request body.
///
/// Both fields carry the form input exactly as typed. Validation and numeric
/// conversion of `price` happen on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name as typed.
    pub name: String,
    /// Price as typed.
    pub price: String,
}

impl ProductDraft {
    /// Create a draft from raw form values.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}
