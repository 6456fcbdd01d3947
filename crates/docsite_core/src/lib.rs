//! Page utilities for the short-sell list documentation site.
//! Every DOM access goes through the `DomHost` capability trait.

pub mod clock;
pub mod config;
pub mod dom;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod model;
pub mod notify;
pub mod page;
pub mod render;
pub mod table;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, DisplayZone, SiteConfig};
pub use dom::{DomError, DomHost, DomResult, DownloadFile, MemoryDocument, NodeId};
pub use fetch::{
    load_json, load_json_as, FetchResponse, Fetcher, LoadError, LoadResult, NetworkError,
};
pub use format::{format_date, format_date_time, format_number, DateFormatter, INVALID_DATE};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::feed::{ChangeRecord, RecentChange, ShortSellList, SiteStats, Stock};
pub use model::nav::NavLink;
pub use model::toast::{Toast, ToastId, ToastKind};
pub use notify::{Debouncer, ToastNotifier, ToastPhase, ToastSettings};
pub use page::{on_page_load, PageService};
pub use render::{highlight_current_nav, show_empty, show_error, show_loading};
pub use table::{
    body_values, build_table, export_csv, filter_table, is_row_visible, sort_table,
    table_to_csv, ExportError, ExportResult, CSV_MIME_TYPE, UTF8_BOM,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
