//! Host-agnostic interaction state for board widgets.
//!
//! # Responsibility
//! - Model menu and inline-form state without any rendering dependency.
//! - Hand validated requests to the board store.

pub mod inline_form;
pub mod list_menu;
