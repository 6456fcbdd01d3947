//! Stable column sort.

use crate::dom::{DomHost, DomResult, NodeId};
use crate::table::{body_rows, row_cells};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid float prefix regex")
});

/// Parses the longest leading decimal literal of `value`.
///
/// Mirrors `parseFloat`: leading whitespace is skipped, trailing garbage is
/// ignored (`"12.5%"` → `12.5`), and no numeric prefix yields `None`.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let candidate = value.trim_start();
    let literal = FLOAT_PREFIX_RE.find(candidate)?.as_str();
    let unsigned = literal.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return Some(if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    literal.parse::<f64>().ok()
}

thread_local! {
    static ZH_COLLATOR: Option<Collator> = build_zh_collator();
}

fn build_zh_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&locale!("zh").into(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(
                "event=collator_init module=table status=error locale=zh error={}",
                err
            );
            None
        }
    }
}

/// Collation used for non-numeric cells: `zh` (pinyin) ordering.
///
/// Han text sorts by pinyin, accented Latin next to its base letter and
/// lowercase before uppercase. Falls back to code point order when the
/// collation data cannot be loaded.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ZH_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Orders two trimmed cell values the way the column sort does.
///
/// Numeric when both sides have a numeric prefix, collated text otherwise.
pub fn compare_cells(a: &str, b: &str, ascending: bool) -> Ordering {
    let (first, second) = if ascending { (a, b) } else { (b, a) };
    match (parse_float_prefix(first), parse_float_prefix(second)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => locale_compare(first, second),
    }
}

/// Reorders the body rows of `table` by the cell at `column`.
///
/// Rows missing that cell sort as empty text. Equal keys keep their
/// relative order.
pub fn sort_table<H: DomHost + ?Sized>(
    host: &mut H,
    table: NodeId,
    column: usize,
    ascending: bool,
) -> DomResult<()> {
    let Some(tbody) = host.first_by_tag(table, "tbody")? else {
        return Ok(());
    };

    let mut keyed = Vec::new();
    for row in body_rows(&*host, table)? {
        let key = match row_cells(&*host, row)?.get(column) {
            Some(cell) => host.text_content(*cell)?.trim().to_string(),
            None => String::new(),
        };
        keyed.push((key, row));
    }

    merge_sort_by(&mut keyed, |left, right| {
        compare_cells(&left.0, &right.0, ascending)
    });

    let row_count = keyed.len();
    for (_, row) in keyed {
        host.append_child(tbody, row)?;
    }

    debug!(
        "event=table_sort module=table status=ok column={} ascending={} rows={}",
        column, ascending, row_count
    );
    Ok(())
}

/// Bottom-up merge sort; stable for any comparator, total order or not.
pub(crate) fn merge_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    let mut width = 1;
    while width < len {
        let mut merged = Vec::with_capacity(len);
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            while left < mid && right < end {
                if compare(&items[right], &items[left]) == Ordering::Less {
                    merged.push(items[right].clone());
                    right += 1;
                } else {
                    merged.push(items[left].clone());
                    left += 1;
                }
            }
            merged.extend_from_slice(&items[left..mid]);
            merged.extend_from_slice(&items[right..end]);
            start = end;
        }
        *items = merged;
        width *= 2;
    }
}
