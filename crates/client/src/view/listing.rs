//! Product list rendering model.

use shopfront_core::{Product, ProductId};

use super::text;
use crate::controller::UiEvent;

/// What a list control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Edit,
    Delete,
    Retry,
}

impl ControlKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => text::EDIT_LABEL,
            Self::Delete => text::DELETE_LABEL,
            Self::Retry => text::RETRY_LABEL,
        }
    }
}

/// A button attached to a list item, bound to the event it dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub event: UiEvent,
}

impl Control {
    fn new(kind: ControlKind, event: UiEvent) -> Self {
        Self { kind, event }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// One rendered `<li>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    /// A product, with admin controls when the session is authenticated.
    Product {
        product: Product,
        label: String,
        controls: Vec<Control>,
    },
    /// A stand-in when there is nothing to list.
    Placeholder {
        text: &'static str,
        retry: Option<Control>,
    },
}

impl ListItem {
    /// Visible text of the entry, without its controls.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Product { label, .. } => label.as_str(),
            Self::Placeholder { text, .. } => *text,
        }
    }

    /// Controls attached to this entry.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        match self {
            Self::Product { controls, .. } => controls.as_slice(),
            Self::Placeholder { retry, .. } => retry.as_slice(),
        }
    }
}

/// Full contents of the product list. Each refresh builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    items: Vec<ListItem>,
}

impl Listing {
    /// One entry per product, or a single placeholder for an empty collection.
    #[must_use]
    pub fn from_products(products: Vec<Product>, admin: bool) -> Self {
        if products.is_empty() {
            return Self {
                items: vec![ListItem::Placeholder {
                    text: text::EMPTY_LIST,
                    retry: None,
                }],
            };
        }

        let items = products
            .into_iter()
            .map(|product| {
                let controls = if admin {
                    vec![
                        Control::new(ControlKind::Edit, UiEvent::Edit(product.clone())),
                        Control::new(ControlKind::Delete, UiEvent::Delete(product.id)),
                    ]
                } else {
                    Vec::new()
                };

                ListItem::Product {
                    label: product.label(),
                    product,
                    controls,
                }
            })
            .collect();

        Self { items }
    }

    /// Placeholder shown when the collection could not be read.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            items: vec![ListItem::Placeholder {
                text: text::LIST_UNAVAILABLE,
                retry: Some(Control::new(ControlKind::Retry, UiEvent::Refresh)),
            }],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifiers of the products currently listed.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.items.iter().filter_map(|item| match item {
            ListItem::Product { product, .. } => Some(product.id),
            ListItem::Placeholder { .. } => None,
        })
    }

    /// Find the control of `kind` on the entry for `id`.
    #[must_use]
    pub fn control_for(&self, id: ProductId, kind: ControlKind) -> Option<&Control> {
        self.items
            .iter()
            .find(|item| matches!(item, ListItem::Product { product, .. } if product.id == id))
            .and_then(|item| item.controls().iter().find(|c| c.kind == kind))
    }

    /// The retry control of the unavailable placeholder, if shown.
    #[must_use]
    pub fn retry_control(&self) -> Option<&Control> {
        self.items
            .iter()
            .flat_map(ListItem::controls)
            .find(|c| c.kind == ControlKind::Retry)
    }
}
