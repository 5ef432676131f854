//! Headless page.
//!
//! An in-memory stand-in for the document: it holds the value, text, and
//! visibility of every [`ElementId`] and turns clicks into [`UiEvent`]s. The
//! terminal front end renders it, and tests assert against it.

use secrecy::{ExposeSecret, SecretString};
use shopfront_core::{ProductDraft, ProductId};

use super::{ControlKind, ElementId, Listing, Section, View, text};
use crate::api::Credentials;
use crate::controller::UiEvent;

/// In-memory page state.
#[derive(Debug)]
pub struct Page {
    section: Section,
    email: String,
    password: SecretString,
    login_message: String,
    product_name: String,
    product_price: String,
    submit_label: String,
    cancel_visible: bool,
    form_message: String,
    listing: Listing,
    confirm_answer: bool,
    prompts: Vec<String>,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// A blank page showing the login section.
    ///
    /// Confirmation prompts are declined until [`Page::answer_confirm`] says
    /// otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            section: Section::Login,
            email: String::new(),
            password: SecretString::from(String::new()),
            login_message: String::new(),
            product_name: String::new(),
            product_price: String::new(),
            submit_label: text::SUBMIT_CREATE_LABEL.to_string(),
            cancel_visible: false,
            form_message: String::new(),
            listing: Listing::default(),
            confirm_answer: false,
            prompts: Vec::new(),
            alerts: Vec::new(),
        }
    }

    // =========================================================================
    // User input
    // =========================================================================

    /// Fill the login form.
    pub fn type_login(&mut self, email: &str, password: &str) {
        self.email = email.to_owned();
        self.password = SecretString::from(password.to_owned());
    }

    /// Fill the product form.
    pub fn type_product(&mut self, name: &str, price: &str) {
        self.product_name = name.to_owned();
        self.product_price = price.to_owned();
    }

    /// Set the value of a text input. Returns `false` for non-input elements.
    pub fn type_into(&mut self, element: ElementId, value: &str) -> bool {
        match element {
            ElementId::Email => self.email = value.to_owned(),
            ElementId::Password => self.password = SecretString::from(value.to_owned()),
            ElementId::ProductName => self.product_name = value.to_owned(),
            ElementId::ProductPrice => self.product_price = value.to_owned(),
            _ => return false,
        }
        true
    }

    /// Answer to give future confirmation prompts.
    pub const fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    /// Click a page element, yielding the event it triggers.
    ///
    /// Hidden elements are inert.
    #[must_use]
    pub fn click(&self, element: ElementId) -> Option<UiEvent> {
        if !self.is_visible(element) {
            return None;
        }

        match element {
            ElementId::LoginForm => Some(UiEvent::SubmitLogin),
            ElementId::ProductForm | ElementId::SubmitProduct => Some(UiEvent::SubmitProduct),
            ElementId::CancelEdit => Some(UiEvent::CancelEdit),
            _ => None,
        }
    }

    /// Click the "edit" control on a listed product.
    #[must_use]
    pub fn click_edit(&self, id: ProductId) -> Option<UiEvent> {
        self.listing
            .control_for(id, ControlKind::Edit)
            .map(|c| c.event.clone())
    }

    /// Click the "delete" control on a listed product.
    #[must_use]
    pub fn click_delete(&self, id: ProductId) -> Option<UiEvent> {
        self.listing
            .control_for(id, ControlKind::Delete)
            .map(|c| c.event.clone())
    }

    /// Click the retry control of the unavailable placeholder.
    #[must_use]
    pub fn click_retry(&self) -> Option<UiEvent> {
        self.listing.retry_control().map(|c| c.event.clone())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub const fn listing(&self) -> &Listing {
        &self.listing
    }

    #[must_use]
    pub fn login_message(&self) -> &str {
        &self.login_message
    }

    #[must_use]
    pub fn form_message(&self) -> &str {
        &self.form_message
    }

    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Current `(name, price)` field values.
    #[must_use]
    pub fn product_fields(&self) -> (&str, &str) {
        (self.product_name.as_str(), self.product_price.as_str())
    }

    /// Prompts shown by [`View::confirm`], oldest first.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Alerts shown so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain the alerts shown so far.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Whether an element is currently displayed.
    #[must_use]
    pub const fn is_visible(&self, element: ElementId) -> bool {
        let in_login = matches!(self.section, Section::Login);
        match element {
            ElementId::LoginSection
            | ElementId::LoginForm
            | ElementId::Email
            | ElementId::Password
            | ElementId::LoginMessage => in_login,
            ElementId::AdminSection
            | ElementId::ProductForm
            | ElementId::ProductName
            | ElementId::ProductPrice
            | ElementId::SubmitProduct
            | ElementId::FormMessage => !in_login,
            ElementId::CancelEdit => !in_login && self.cancel_visible,
            ElementId::ProductList => true,
        }
    }

    /// Text content or input value of an element.
    ///
    /// The password field never reveals its value.
    #[must_use]
    pub fn text(&self, element: ElementId) -> Option<&str> {
        match element {
            ElementId::Email => Some(self.email.as_str()),
            ElementId::LoginMessage => Some(self.login_message.as_str()),
            ElementId::ProductName => Some(self.product_name.as_str()),
            ElementId::ProductPrice => Some(self.product_price.as_str()),
            ElementId::SubmitProduct => Some(self.submit_label.as_str()),
            ElementId::CancelEdit => Some(text::CANCEL_EDIT_LABEL),
            ElementId::FormMessage => Some(self.form_message.as_str()),
            _ => None,
        }
    }
}

impl View for Page {
    fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    fn render_listing(&mut self, listing: Listing) {
        self.listing = listing;
    }

    fn login_input(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.expose_secret().to_owned())
    }

    fn set_login_message(&mut self, message: &str) {
        message.clone_into(&mut self.login_message);
    }

    fn product_input(&self) -> ProductDraft {
        ProductDraft::new(self.product_name.clone(), self.product_price.clone())
    }

    fn set_product_input(&mut self, name: &str, price: &str) {
        self.type_product(name, price);
    }

    fn set_submit_label(&mut self, label: &str) {
        label.clone_into(&mut self.submit_label);
    }

    fn set_cancel_visible(&mut self, visible: bool) {
        self.cancel_visible = visible;
    }

    fn set_form_message(&mut self, message: &str) {
        message.clone_into(&mut self.form_message);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_owned());
        self.confirm_answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
