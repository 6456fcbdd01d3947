//! Toast notification value object.
//!
//! # Invariants
//! - `id` is generated per toast and never reused.
//! - `created_at` is the epoch-millisecond time the toast was shown.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one shown toast.
pub type ToastId = Uuid;

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Left border accent color.
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Info => "#3b82f6",
            Self::Success => "#00ff88",
            Self::Error => "#ff6b6b",
        }
    }
}

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at,
        }
    }
}
