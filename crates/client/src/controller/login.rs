//! Login handler.

use tracing::{info, warn};

use super::Storefront;
use crate::api::{Credentials, StoreApi};
use crate::view::{Section, View, text};

impl<A: StoreApi, V: View> Storefront<A, V> {
    /// Submit credentials.
    ///
    /// A 2xx response authenticates the session, swaps the login section for
    /// the admin section, and refreshes the list so admin controls appear.
    /// Any other outcome, including a transport failure, leaves the session
    /// anonymous and shows the fixed invalid-credentials message. If the
    /// session was authenticated, the admin section is closed and the list is
    /// re-rendered without admin controls.
    pub async fn login(&mut self, credentials: Credentials) {
        match self.api.login(&credentials).await {
            Ok(()) => {
                self.session.authenticate();
                info!(email = %credentials.email, "Admin session authenticated");

                self.view.show_section(Section::Admin);
                self.view.set_login_message("");
                self.refresh().await;
            }
            Err(e) => {
                let was_authenticated = self.session.is_authenticated();
                self.session.reject();
                warn!(
                    email = %credentials.email,
                    status = ?e.status(),
                    error = %e,
                    "Login rejected"
                );

                self.view.set_login_message(text::INVALID_CREDENTIALS);
                if was_authenticated {
                    self.edit.finish();
                    self.reset_product_form();
                    self.view.show_section(Section::Login);
                    self.refresh().await;
                }
            }
        }
    }
}
