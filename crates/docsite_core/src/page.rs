//! Per-page service.
//!
//! # Responsibility
//! - Bundle one document, its config and its toast notifier.
//! - Expose the page utilities as stable entry points for page scripts.
//!
//! # Invariants
//! - Service methods delegate to the free functions; no extra state besides
//!   the notifier.

use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::dom::{DomError, DomHost, DomResult, DownloadFile, NodeId};
use crate::fetch::{load_json_as, Fetcher, LoadResult};
use crate::format::DateFormatter;
use crate::model::nav::NavLink;
use crate::model::toast::{ToastId, ToastKind};
use crate::notify::ToastNotifier;
use crate::render;
use crate::table::{self, ExportResult};
use log::warn;
use serde::de::DeserializeOwned;

/// Page-load hook: highlights the navigation entry for `pathname`.
pub fn on_page_load<H: DomHost + ?Sized>(
    host: &mut H,
    pathname: &str,
    config: &SiteConfig,
) -> DomResult<Vec<NavLink>> {
    render::highlight_current_nav(host, pathname, &config.default_page)
}

/// Use-case wrapper over one page document.
pub struct PageService<H: DomHost, C: Clock> {
    host: H,
    config: SiteConfig,
    notifier: ToastNotifier<C>,
}

impl<H: DomHost, C: Clock> PageService<H, C> {
    pub fn new(host: H, clock: C, config: SiteConfig) -> Self {
        let notifier = ToastNotifier::from_config(clock, &config);
        Self {
            host,
            config,
            notifier,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn notifier(&self) -> &ToastNotifier<C> {
        &self.notifier
    }

    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::from_config(&self.config)
    }

    pub fn on_page_load(&mut self, pathname: &str) -> DomResult<Vec<NavLink>> {
        on_page_load(&mut self.host, pathname, &self.config)
    }

    /// Shows the configured loading message in `#container_id`.
    pub fn show_loading(&mut self, container_id: &str) -> DomResult<bool> {
        render::show_loading(&mut self.host, container_id, &self.config.loading_message)
    }

    pub fn show_error(&mut self, container_id: &str, message: &str) -> DomResult<bool> {
        render::show_error(&mut self.host, container_id, message)
    }

    pub fn show_empty(&mut self, container_id: &str, message: &str) -> DomResult<bool> {
        render::show_empty(&mut self.host, container_id, message)
    }

    /// Loads one JSON feed; on failure shows `error_message` in
    /// `#container_id` before returning the error.
    ///
    /// Placeholder render failures are logged and never replace the load
    /// result.
    pub fn load_into<T, F>(
        &mut self,
        fetcher: &F,
        url: &str,
        container_id: &str,
        error_message: &str,
    ) -> LoadResult<T>
    where
        T: DeserializeOwned,
        F: Fetcher + ?Sized,
    {
        if let Err(err) = self.show_loading(container_id) {
            warn_render_failure("loading", container_id, &err);
        }
        let result = load_json_as(&fetcher, url);
        if result.is_err() {
            if let Err(err) = self.show_error(container_id, error_message) {
                warn_render_failure("error", container_id, &err);
            }
        }
        result
    }

    pub fn build_table(
        &mut self,
        parent: NodeId,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> DomResult<NodeId> {
        table::build_table(&mut self.host, parent, headers, rows)
    }

    pub fn sort_table(&mut self, table: NodeId, column: usize, ascending: bool) -> DomResult<()> {
        table::sort_table(&mut self.host, table, column, ascending)
    }

    pub fn filter_table(&mut self, table: NodeId, query: &str) -> DomResult<()> {
        table::filter_table(&mut self.host, table, query)
    }

    pub fn export_csv(&mut self, table: NodeId, filename: &str) -> ExportResult<DownloadFile> {
        table::export_csv(
            &mut self.host,
            &mut self.notifier,
            table,
            filename,
            &self.config.export_success_message,
        )
    }

    pub fn notify(&mut self, message: &str, kind: ToastKind) -> DomResult<ToastId> {
        self.notifier.notify(&mut self.host, message, kind)
    }

    /// Advances toast timers; returns how many toasts were removed.
    pub fn tick(&mut self) -> DomResult<usize> {
        self.notifier.tick(&mut self.host)
    }
}

fn warn_render_failure(state: &str, container_id: &str, err: &DomError) {
    warn!(
        "event=render_state module=page status=error state={} container={} error={}",
        state, container_id, err
    );
}
