//! Navigation link snapshot.

use serde::{Deserialize, Serialize};

/// One `.nav-link` as seen by the highlighter on page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Raw `href` attribute; empty when the link has none.
    pub href: String,
    pub is_active: bool,
}
