//! Reusable TUI widgets.

pub mod form;
pub mod modal;
pub mod status_bar;

pub use form::{Form, FormField, draw_form};
pub use modal::{draw_modal, modal_area};
pub use status_bar::{StatusBarContext, draw_status_bar};
