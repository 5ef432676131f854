//! Product list refresh and delete.

use shopfront_core::ProductId;
use tracing::{debug, info, warn};

use super::Storefront;
use crate::api::StoreApi;
use crate::view::{Listing, View, text};

impl<A: StoreApi, V: View> Storefront<A, V> {
    /// Re-fetch the collection and replace the rendered list.
    ///
    /// Admin controls are attached if the session is authenticated at render
    /// time. A failed read renders a placeholder with a retry control and
    /// leaves session and edit state alone.
    pub async fn refresh(&mut self) {
        let listing = match self.api.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Loaded products");
                Listing::from_products(products, self.session.is_authenticated())
            }
            Err(e) => {
                warn!(status = ?e.status(), error = %e, "Failed to load products");
                Listing::unavailable()
            }
        };

        self.rendered = listing.product_ids().collect();
        self.view.render_listing(listing);
    }

    /// Confirm, then delete a listed product.
    ///
    /// Requests for products that are not on screen are dropped, which also
    /// absorbs a second click on a product the previous click already removed.
    /// Deleting the product that is being edited returns the form to create
    /// mode.
    pub async fn delete_product(&mut self, id: ProductId) {
        if !self.is_actionable(id) {
            debug!(%id, "Ignoring delete for product not on screen");
            return;
        }

        if !self.view.confirm(text::CONFIRM_DELETE) {
            debug!(%id, "Delete declined");
            return;
        }

        match self.api.delete_product(id).await {
            Ok(()) => {
                info!(%id, "Product deleted");
                if self.edit.release(id) {
                    self.reset_product_form();
                }
                self.refresh().await;
            }
            Err(e) => {
                warn!(%id, status = ?e.status(), error = %e, "Failed to delete product");
                self.view.alert(text::DELETE_FAILED);
            }
        }
    }
}
