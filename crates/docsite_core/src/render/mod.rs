//! Fixed-fragment rendering and navigation state.
//!
//! # Invariants
//! - Missing target containers are a silent no-op, never an error.
//! - Caller-supplied text is HTML-escaped before it enters markup.

mod nav;
mod state;

pub use nav::{current_page, highlight_current_nav, ACTIVE_CLASS, NAV_LINK_CLASS};
pub use state::{
    escape_html, empty_markup, error_markup, loading_markup, show_empty, show_error,
    show_loading,
};
