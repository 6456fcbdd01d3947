//! Timer-driven notification helpers.
//!
//! # Responsibility
//! - Show and expire toast notifications in a page-lifetime container.
//! - Debounce bursty callbacks such as search-as-you-type.
//!
//! # Invariants
//! - Time only advances through a [`crate::clock::Clock`]; timers fire when
//!   the owner calls `tick()` / `poll()`.

mod debounce;
mod toast;

pub use debounce::Debouncer;
pub use toast::{ToastNotifier, ToastPhase, ToastSettings, TOAST_KEYFRAMES};
