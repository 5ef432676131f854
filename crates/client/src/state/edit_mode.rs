//! Create-vs-update form mode.

use shopfront_core::ProductId;

/// Which request the product form will send on submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Submit creates a new product.
    #[default]
    Create,
    /// Submit updates the product with this identifier.
    Editing(ProductId),
}

/// Owner of the single edit target.
///
/// At most one product is being edited at a time. Choosing edit on another
/// product replaces the target; every other transition returns to
/// [`EditMode::Create`].
#[derive(Debug, Clone, Default)]
pub struct EditModeController {
    mode: EditMode,
}

impl EditModeController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: EditMode::Create,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// The product being edited, if any.
    #[must_use]
    pub const fn target(&self) -> Option<ProductId> {
        match self.mode {
            EditMode::Create => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    /// Start editing `id`.
    pub(crate) const fn begin(&mut self, id: ProductId) {
        self.mode = EditMode::Editing(id);
    }

    /// Return to create mode, yielding the previous target.
    pub(crate) const fn finish(&mut self) -> Option<ProductId> {
        let target = self.target();
        self.mode = EditMode::Create;
        target
    }

    /// Return to create mode only if `id` is the current target.
    pub(crate) fn release(&mut self, id: ProductId) -> bool {
        if self.target() == Some(id) {
            self.mode = EditMode::Create;
            return true;
        }
        false
    }
}
