//! The storefront controller.
//!
//! [`Storefront`] owns the session gate, the edit target, the API client, and
//! the view. User actions arrive as [`UiEvent`]s through
//! [`Storefront::dispatch`]; each one runs to completion before the next is
//! accepted, because every handler takes `&mut self`.
//!
//! Control flow:
//!
//! ```text
//! login ─▶ session ─▶ product list ─▶ (edit / delete) ─▶ edit mode ─▶ form submit ─▶ product list
//! ```

mod login;
mod product_form;
mod product_list;

use shopfront_core::{Product, ProductId};

use crate::api::StoreApi;
use crate::state::{EditMode, EditModeController, Session};
use crate::view::{Section, View, text};

/// A user action, as dispatched by a view surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Login form submitted.
    SubmitLogin,
    /// Product form submitted.
    SubmitProduct,
    /// Cancel-edit control clicked.
    CancelEdit,
    /// "Edit" clicked on a listed product.
    Edit(Product),
    /// "Delete" clicked on a listed product.
    Delete(ProductId),
    /// Reload the product list.
    Refresh,
}

/// Admin storefront state machine.
pub struct Storefront<A, V> {
    api: A,
    view: V,
    session: Session,
    edit: EditModeController,
    /// Products whose controls are currently on screen.
    rendered: Vec<ProductId>,
}

impl<A: StoreApi, V: View> Storefront<A, V> {
    /// Wire a controller to its API and view.
    ///
    /// The session starts anonymous and the form starts in create mode; the
    /// view is reset to match.
    pub fn new(api: A, mut view: V) -> Self {
        view.show_section(Section::Login);
        view.set_login_message("");
        view.set_product_input("", "");
        view.set_form_message("");
        view.set_submit_label(text::SUBMIT_CREATE_LABEL);
        view.set_cancel_visible(false);

        Self {
            api,
            view,
            session: Session::new(),
            edit: EditModeController::new(),
            rendered: Vec::new(),
        }
    }

    /// Initial product load.
    pub async fn start(&mut self) {
        self.refresh().await;
    }

    /// Handle one user action.
    pub async fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::SubmitLogin => {
                let credentials = self.view.login_input();
                self.login(credentials).await;
            }
            UiEvent::SubmitProduct => {
                let draft = self.view.product_input();
                self.submit_product(draft).await;
            }
            UiEvent::CancelEdit => self.cancel_edit(),
            UiEvent::Edit(product) => self.begin_edit(&product),
            UiEvent::Delete(id) => self.delete_product(id).await,
            UiEvent::Refresh => self.refresh().await,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn edit_mode(&self) -> EditMode {
        self.edit.mode()
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Whether a control event for `id` belongs to the current rendering.
    fn is_actionable(&self, id: ProductId) -> bool {
        self.session.is_authenticated() && self.rendered.contains(&id)
    }
}
