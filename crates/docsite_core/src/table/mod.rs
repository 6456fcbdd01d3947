//! Table controller: sort, filter and CSV export over a DOM table.
//!
//! # Responsibility
//! - Operate on `table > tbody > tr > td` structures through [`DomHost`].
//! - Build such structures from header/row data for the page scripts.
//!
//! # Invariants
//! - Sort and filter never add or remove rows; they only reorder or hide.
//! - Tables without a `tbody` are left untouched by sort and filter.

use crate::dom::{DomHost, DomResult, NodeId};

mod export;
mod filter;
mod sort;

pub use export::{
    export_csv, table_to_csv, ExportError, ExportResult, CSV_MIME_TYPE, UTF8_BOM,
};
pub use filter::{filter_table, is_row_visible};
pub use sort::{compare_cells, locale_compare, parse_float_prefix, sort_table};

const CELL_TAGS: &[&str] = &["td", "th"];

/// Renders `headers` and `rows` as a new `<table>` appended to `parent`.
pub fn build_table<H, S>(
    host: &mut H,
    parent: NodeId,
    headers: &[S],
    rows: &[Vec<String>],
) -> DomResult<NodeId>
where
    H: DomHost + ?Sized,
    S: AsRef<str>,
{
    let table = host.create_element("table");

    let thead = host.create_element("thead");
    let header_row = host.create_element("tr");
    for header in headers {
        let cell = host.create_element("th");
        host.set_text_content(cell, header.as_ref())?;
        host.append_child(header_row, cell)?;
    }
    host.append_child(thead, header_row)?;
    host.append_child(table, thead)?;

    let tbody = host.create_element("tbody");
    for values in rows {
        let row = host.create_element("tr");
        for value in values {
            let cell = host.create_element("td");
            host.set_text_content(cell, value)?;
            host.append_child(row, cell)?;
        }
        host.append_child(tbody, row)?;
    }
    host.append_child(table, tbody)?;

    host.append_child(parent, table)?;
    Ok(table)
}

/// Body rows of `table` in current order; empty when there is no `tbody`.
pub fn body_rows<H: DomHost + ?Sized>(host: &H, table: NodeId) -> DomResult<Vec<NodeId>> {
    let Some(tbody) = host.first_by_tag(table, "tbody")? else {
        return Ok(Vec::new());
    };
    let mut rows = Vec::new();
    for child in host.children(tbody)? {
        if host.tag_name(child)? == "tr" {
            rows.push(child);
        }
    }
    Ok(rows)
}

/// Trimmed cell texts of every body row, in current order.
pub fn body_values<H: DomHost + ?Sized>(host: &H, table: NodeId) -> DomResult<Vec<Vec<String>>> {
    body_rows(host, table)?
        .into_iter()
        .map(|row| row_values(host, row))
        .collect()
}

/// Direct `td`/`th` children only; cells of a table nested inside a cell
/// belong to that inner table's rows.
pub(crate) fn row_cells<H: DomHost + ?Sized>(host: &H, row: NodeId) -> DomResult<Vec<NodeId>> {
    let mut cells = Vec::new();
    for child in host.children(row)? {
        if CELL_TAGS.contains(&host.tag_name(child)?.as_str()) {
            cells.push(child);
        }
    }
    Ok(cells)
}

pub(crate) fn row_values<H: DomHost + ?Sized>(host: &H, row: NodeId) -> DomResult<Vec<String>> {
    row_cells(host, row)?
        .into_iter()
        .map(|cell| -> DomResult<String> {
            Ok(host.text_content(cell)?.trim().to_string())
        })
        .collect()
}
