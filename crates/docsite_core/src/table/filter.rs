//! Substring row filter.

use crate::dom::{DomHost, DomResult, NodeId};
use crate::table::body_rows;
use log::debug;

const DISPLAY: &str = "display";
const HIDDEN: &str = "none";

/// Shows body rows whose text contains `query` (case-insensitive) and hides
/// the rest.
///
/// An empty query shows every row.
pub fn filter_table<H: DomHost + ?Sized>(
    host: &mut H,
    table: NodeId,
    query: &str,
) -> DomResult<()> {
    let needle = query.to_lowercase();
    let mut visible = 0usize;
    let rows = body_rows(&*host, table)?;
    for row in &rows {
        let text = host.text_content(*row)?.to_lowercase();
        if text.contains(&needle) {
            host.set_style(*row, DISPLAY, "")?;
            visible += 1;
        } else {
            host.set_style(*row, DISPLAY, HIDDEN)?;
        }
    }

    debug!(
        "event=table_filter module=table status=ok rows={} visible={}",
        rows.len(),
        visible
    );
    Ok(())
}

/// Whether `row` is currently shown by the filter.
pub fn is_row_visible<H: DomHost + ?Sized>(host: &H, row: NodeId) -> DomResult<bool> {
    Ok(host.style(row, DISPLAY)?.as_deref() != Some(HIDDEN))
}
