//! Edit-mode transitions and product form submission.

use shopfront_core::{Product, ProductDraft};
use tracing::{debug, info, warn};

use super::Storefront;
use crate::api::{MutationOutcome, StoreApi};
use crate::state::EditMode;
use crate::view::{View, text};

impl<A: StoreApi, V: View> Storefront<A, V> {
    /// Load `product` into the form and switch to update mode.
    ///
    /// Ignored unless the product's controls are on screen.
    pub fn begin_edit(&mut self, product: &Product) {
        if !self.is_actionable(product.id) {
            debug!(id = %product.id, "Ignoring edit for product not on screen");
            return;
        }

        self.edit.begin(product.id);
        self.view
            .set_product_input(&product.name, &product.price.to_string());
        self.view.set_submit_label(text::SUBMIT_UPDATE_LABEL);
        self.view.set_cancel_visible(true);
    }

    /// Abandon the current edit and return to create mode.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit.finish() {
            debug!(%id, "Edit cancelled");
        }
        self.reset_product_form();
    }

    /// Send the form as a create or update, depending on the edit mode.
    ///
    /// An `error` in the response is shown verbatim and nothing else changes,
    /// so the user can correct the input and resubmit. Success clears the
    /// form, leaves update mode, and refreshes the list once.
    pub async fn submit_product(&mut self, draft: ProductDraft) {
        let mode = self.edit.mode();
        let result = match mode {
            EditMode::Create => self.api.create_product(&draft).await,
            EditMode::Editing(id) => self.api.update_product(id, &draft).await,
        };

        match result {
            Ok(MutationOutcome::Applied) => {
                info!(?mode, name = %draft.name, "Product saved");
                self.edit.finish();
                self.reset_product_form();
                self.refresh().await;
            }
            Ok(MutationOutcome::Rejected(message)) => {
                warn!(?mode, error = %message, "Product rejected by server");
                self.view.set_form_message(&message);
            }
            Err(e) => {
                warn!(?mode, error = %e, "Failed to save product");
                self.view.set_form_message(text::SAVE_FAILED);
            }
        }
    }

    /// Empty the form and restore create-mode labelling.
    pub(super) fn reset_product_form(&mut self) {
        self.view.set_product_input("", "");
        self.view.set_form_message("");
        self.view.set_submit_label(text::SUBMIT_CREATE_LABEL);
        self.view.set_cancel_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use shopfront_core::{ProductDraft, ProductId};

    use crate::api::MutationOutcome;
    use crate::error::ApiError;
    use crate::state::EditMode;
    use crate::test_support::{Call, FakeApi, authenticated, product};
    use crate::view::{ElementId, ListItem, text};
    use crate::UiEvent;

    #[tokio::test]
    async fn test_edit_prefills_form_and_switches_labels() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99")]);
        let mut sf = authenticated(api).await;

        let click = sf.view().click_edit(ProductId::new(5));
        if let Some(event) = click {
            sf.dispatch(event).await;
        }

        assert_eq!(sf.edit_mode(), EditMode::Editing(ProductId::new(5)));
        assert_eq!(sf.view().product_fields(), ("Widget", "9.99"));
        assert_eq!(sf.view().submit_label(), text::SUBMIT_UPDATE_LABEL);
        assert!(sf.view().is_visible(ElementId::CancelEdit));
    }

    #[tokio::test]
    async fn test_cancel_restores_create_mode() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99")]);
        let mut sf = authenticated(api).await;

        sf.begin_edit(&product(5, "Widget", "9.99"));
        sf.api().push_mutation_reply(Ok(MutationOutcome::Rejected("price inválido".into())));
        sf.dispatch(UiEvent::SubmitProduct).await;
        assert_eq!(sf.view().form_message(), "price inválido");

        let cancel = sf.view().click(ElementId::CancelEdit);
        assert_eq!(cancel, Some(UiEvent::CancelEdit));
        if let Some(event) = cancel {
            sf.dispatch(event).await;
        }

        assert_eq!(sf.edit_mode(), EditMode::Create);
        assert_eq!(sf.view().product_fields(), ("", ""));
        assert_eq!(sf.view().form_message(), "");
        assert_eq!(sf.view().submit_label(), text::SUBMIT_CREATE_LABEL);
        assert!(!sf.view().is_visible(ElementId::CancelEdit));
    }

    #[tokio::test]
    async fn test_create_success_clears_form_and_refreshes_once() {
        let mut sf = authenticated(FakeApi::new()).await;
        let before = sf.api().list_calls();

        sf.view_mut().type_product("Widget", "9.99");
        sf.dispatch(UiEvent::SubmitProduct).await;

        assert!(
            sf.api()
                .calls()
                .contains(&Call::Create(ProductDraft::new("Widget", "9.99")))
        );
        assert_eq!(sf.api().list_calls(), before + 1);
        assert_eq!(sf.view().product_fields(), ("", ""));
        assert_eq!(sf.view().form_message(), "");
        assert_eq!(sf.edit_mode(), EditMode::Create);

        let texts: Vec<&str> = sf.view().listing().items().iter().map(ListItem::text).collect();
        assert_eq!(texts, vec!["Widget - $9.99"]);
    }

    #[tokio::test]
    async fn test_update_success_returns_to_create_mode() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99")]);
        let mut sf = authenticated(api).await;
        let before = sf.api().list_calls();

        sf.begin_edit(&product(5, "Widget", "9.99"));
        sf.view_mut().type_product("Widget Pro", "12.50");
        sf.dispatch(UiEvent::SubmitProduct).await;

        assert!(sf.api().calls().contains(&Call::Update(
            ProductId::new(5),
            ProductDraft::new("Widget Pro", "12.50")
        )));
        assert_eq!(sf.api().list_calls(), before + 1);
        assert_eq!(sf.edit_mode(), EditMode::Create);
        assert_eq!(sf.view().product_fields(), ("", ""));
        assert_eq!(sf.view().submit_label(), text::SUBMIT_CREATE_LABEL);
        assert!(!sf.view().is_visible(ElementId::CancelEdit));
        assert_eq!(
            sf.view().listing().items().first().map(ListItem::text),
            Some("Widget Pro - $12.5")
        );
    }

    #[tokio::test]
    async fn test_update_rejection_keeps_everything() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99")]);
        let mut sf = authenticated(api).await;
        let before = sf.api().list_calls();

        sf.begin_edit(&product(5, "Widget", "9.99"));
        sf.view_mut().type_product("Widget", "nueve");
        sf.api()
            .push_mutation_reply(Ok(MutationOutcome::Rejected("price inválido".into())));
        sf.dispatch(UiEvent::SubmitProduct).await;

        assert_eq!(sf.view().form_message(), "price inválido");
        assert_eq!(sf.edit_mode(), EditMode::Editing(ProductId::new(5)));
        assert_eq!(sf.view().product_fields(), ("Widget", "nueve"));
        assert_eq!(sf.view().submit_label(), text::SUBMIT_UPDATE_LABEL);
        assert_eq!(sf.api().list_calls(), before);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_message() {
        let mut sf = authenticated(FakeApi::new()).await;
        let before = sf.api().list_calls();

        sf.view_mut().type_product("Widget", "9.99");
        sf.api()
            .push_mutation_reply(Err(ApiError::Parse("expected a JSON object".into())));
        sf.dispatch(UiEvent::SubmitProduct).await;

        assert_eq!(sf.view().form_message(), text::SAVE_FAILED);
        assert_eq!(sf.view().product_fields(), ("Widget", "9.99"));
        assert_eq!(sf.api().list_calls(), before);
    }

    #[tokio::test]
    async fn test_retry_after_rejection_succeeds() {
        let mut sf = authenticated(FakeApi::new()).await;

        sf.view_mut().type_product("Widget", "");
        sf.api()
            .push_mutation_reply(Ok(MutationOutcome::Rejected("Price must be a number".into())));
        sf.dispatch(UiEvent::SubmitProduct).await;
        assert_eq!(sf.view().form_message(), "Price must be a number");

        sf.view_mut().type_product("Widget", "9.99");
        sf.dispatch(UiEvent::SubmitProduct).await;

        assert_eq!(sf.view().form_message(), "");
        assert_eq!(sf.view().listing().product_ids().count(), 1);
    }

    #[tokio::test]
    async fn test_edit_of_product_not_on_screen_is_ignored() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99")]);
        let mut sf = authenticated(api).await;

        sf.dispatch(UiEvent::Edit(product(99, "Ghost", "1"))).await;

        assert_eq!(sf.edit_mode(), EditMode::Create);
        assert_eq!(sf.view().product_fields(), ("", ""));
    }

    #[tokio::test]
    async fn test_second_edit_replaces_target() {
        let api = FakeApi::new();
        api.set_products(vec![product(5, "Widget", "9.99"), product(6, "Gadget", "3")]);
        let mut sf = authenticated(api).await;

        sf.begin_edit(&product(5, "Widget", "9.99"));
        sf.begin_edit(&product(6, "Gadget", "3"));

        assert_eq!(sf.edit_mode(), EditMode::Editing(ProductId::new(6)));
        assert_eq!(sf.view().product_fields(), ("Gadget", "3"));
    }
}
