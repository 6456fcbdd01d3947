//! Value types shared by the page utilities.
//!
//! # Responsibility
//! - Define the toast and navigation records components hand back.
//! - Define typed shapes for the JSON feeds the site pages load.
//!
//! # Invariants
//! - Every toast carries a unique `ToastId`.
//! - Feed types mirror the on-disk JSON field names exactly.

pub mod feed;
pub mod nav;
pub mod toast;
