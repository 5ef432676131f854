//! Client-side state owned by the storefront controller.
//!
//! Both pieces expose transition methods only. Raw mutation is not possible
//! from outside the crate.

mod edit_mode;
mod session;

pub use edit_mode::{EditMode, EditModeController};
pub use session::Session;
