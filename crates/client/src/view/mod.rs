//! Rendering surface.
//!
//! The controller never touches a concrete UI. It talks to a [`View`], which
//! owns the page elements listed in [`ElementId`], and receives user actions
//! back as [`UiEvent`](crate::UiEvent) values.

mod listing;
mod page;
pub mod text;

pub use listing::{Control, ControlKind, ListItem, Listing};
pub use page::Page;

use core::fmt;

use shopfront_core::ProductDraft;

use crate::api::Credentials;

/// Fixed element identifiers of the page skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    LoginSection,
    LoginForm,
    Email,
    Password,
    LoginMessage,
    AdminSection,
    ProductForm,
    ProductName,
    ProductPrice,
    SubmitProduct,
    CancelEdit,
    FormMessage,
    ProductList,
}

impl ElementId {
    /// The DOM identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginSection => "login-section",
            Self::LoginForm => "login-form",
            Self::Email => "email",
            Self::Password => "password",
            Self::LoginMessage => "login-msg",
            Self::AdminSection => "admin-section",
            Self::ProductForm => "product-form",
            Self::ProductName => "prod-name",
            Self::ProductPrice => "prod-price",
            Self::SubmitProduct => "submit-product",
            Self::CancelEdit => "cancel-edit",
            Self::FormMessage => "form-msg",
            Self::ProductList => "product-list",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two mutually exclusive sections is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Login,
    Admin,
}

/// Everything the controller needs from a rendering surface.
pub trait View {
    /// Show `section` and hide the other one.
    fn show_section(&mut self, section: Section);

    /// Replace the whole product list.
    fn render_listing(&mut self, listing: Listing);

    /// Current contents of the `email` and `password` fields.
    fn login_input(&self) -> Credentials;

    fn set_login_message(&mut self, message: &str);

    /// Current contents of the `prod-name` and `prod-price` fields.
    fn product_input(&self) -> ProductDraft;

    fn set_product_input(&mut self, name: &str, price: &str);

    fn set_submit_label(&mut self, label: &str);

    fn set_cancel_visible(&mut self, visible: bool);

    fn set_form_message(&mut self, message: &str);

    /// Ask a yes/no question. `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Report a failure that has no dedicated message area.
    fn alert(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_dom_id() {
        assert_eq!(ElementId::LoginForm.to_string(), "login-form");
        assert_eq!(ElementId::ProductName.to_string(), "prod-name");
        assert_eq!(ElementId::CancelEdit.to_string(), "cancel-edit");
    }
}
