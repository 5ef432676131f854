//! Terminal rendering surface.

use std::io::{self, BufRead, Write};

use shopfront_client::view::text;
use shopfront_client::{Credentials, ElementId, ListItem, Listing, Page, Section, View};
use shopfront_core::ProductDraft;

/// A [`Page`] that asks for confirmation on stdin and prints alerts.
pub struct TerminalView {
    page: Page,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    #[must_use]
    pub fn new() -> Self {
        Self { page: Page::new() }
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    pub const fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }
}

impl View for TerminalView {
    fn show_section(&mut self, section: Section) {
        self.page.show_section(section);
    }

    fn render_listing(&mut self, listing: Listing) {
        self.page.render_listing(listing);
    }

    fn login_input(&self) -> Credentials {
        self.page.login_input()
    }

    fn set_login_message(&mut self, message: &str) {
        self.page.set_login_message(message);
    }

    fn product_input(&self) -> ProductDraft {
        self.page.product_input()
    }

    fn set_product_input(&mut self, name: &str, price: &str) {
        self.page.set_product_input(name, price);
    }

    fn set_submit_label(&mut self, label: &str) {
        self.page.set_submit_label(label);
    }

    fn set_cancel_visible(&mut self, visible: bool) {
        self.page.set_cancel_visible(visible);
    }

    fn set_form_message(&mut self, message: &str) {
        self.page.set_form_message(message);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        match ask(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(io::stdout(), "! {message}") {
            tracing::warn!(error = %e, "Could not write alert");
        }
        self.page.alert(message);
    }
}

/// Ask a yes/no question. Only an explicit yes counts.
fn ask(prompt: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt} [s/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Draw the page.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render(page: &Page, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== Productos ==")?;
    for item in page.listing().items() {
        render_item(item, out)?;
    }

    match page.section() {
        Section::Login => {
            writeln!(out, "== Acceso ==")?;
            writeln!(out, "  email: {}", page.text(ElementId::Email).unwrap_or_default())?;
            render_message(page.login_message(), out)?;
        }
        Section::Admin => {
            let (name, price) = page.product_fields();
            writeln!(out, "== Administración ==")?;
            writeln!(out, "  nombre: {name}")?;
            writeln!(out, "  precio: {price}")?;
            if page.is_visible(ElementId::CancelEdit) {
                writeln!(out, "  [{}]  [{}]", page.submit_label(), text::CANCEL_EDIT_LABEL)?;
            } else {
                writeln!(out, "  [{}]", page.submit_label())?;
            }
            render_message(page.form_message(), out)?;
        }
    }

    Ok(())
}

fn render_item(item: &ListItem, out: &mut impl Write) -> io::Result<()> {
    let controls: Vec<&str> = item.controls().iter().map(|c| c.label()).collect();
    let prefix = match item {
        ListItem::Product { product, .. } => format!("#{} ", product.id),
        ListItem::Placeholder { .. } => String::new(),
    };

    if controls.is_empty() {
        writeln!(out, "  {prefix}{}", item.text())
    } else {
        writeln!(out, "  {prefix}{}  [{}]", item.text(), controls.join("] ["))
    }
}

fn render_message(message: &str, out: &mut impl Write) -> io::Result<()> {
    if message.is_empty() {
        return Ok(());
    }
    writeln!(out, "  ! {message}")
}
