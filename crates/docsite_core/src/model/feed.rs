//! JSON feeds published for the site pages.
//!
//! `current.json` holds the latest short-sell list, `history.json` the change
//! records (newest first) and `stats.json` the aggregated counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column headers used when a list is rendered as a table.
pub const STOCK_TABLE_HEADERS: [&str; 3] = ["代码", "名称", "货币"];

/// Currency label used when a stock has none.
pub const UNKNOWN_CURRENCY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Stock {
    pub fn currency_or_unknown(&self) -> &str {
        self.currency.as_deref().unwrap_or(UNKNOWN_CURRENCY)
    }

    /// Cell values in [`STOCK_TABLE_HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.currency_or_unknown().to_string(),
        ]
    }
}

/// `current.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortSellList {
    /// List publication date, `YYYY-MM-DD`.
    pub date: String,
    pub total: u32,
    pub stocks: Vec<Stock>,
}

impl ShortSellList {
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.stocks.iter().map(Stock::cells).collect()
    }
}

/// One entry of `history.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub date: String,
    /// ISO-8601 time the change was detected.
    pub timestamp: String,
    pub old_total: u32,
    pub new_total: u32,
    pub net_change: i64,
    pub added: Vec<Stock>,
    pub removed: Vec<Stock>,
}

impl ChangeRecord {
    /// Multi-line human-readable summary of the change.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("更新日期: {}", self.date),
            format!(
                "总数变化: {} → {} ({:+})",
                self.old_total, self.new_total, self.net_change
            ),
        ];
        if !self.added.is_empty() {
            lines.push(format!("\n新增 {} 只股票:", self.added.len()));
            for stock in &self.added {
                lines.push(format!(
                    "  [{}] {} ({})",
                    stock.code,
                    stock.name,
                    stock.currency_or_unknown()
                ));
            }
        }
        if !self.removed.is_empty() {
            lines.push(format!("\n移除 {} 只股票:", self.removed.len()));
            for stock in &self.removed {
                lines.push(format!("  [{}] {}", stock.code, stock.name));
            }
        }
        lines.join("\n")
    }
}

/// Entry of `SiteStats::recent_changes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentChange {
    pub date: String,
    pub added_count: u32,
    pub removed_count: u32,
    pub net_change: i64,
}

/// `stats.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    pub last_update: String,
    pub current_total: u32,
    pub total_changes: u32,
    /// Change count per `YYYY-MM`.
    #[serde(default)]
    pub update_frequency: BTreeMap<String, u32>,
    /// Stock count per trading currency.
    #[serde(default)]
    pub currency_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub recent_changes: Vec<RecentChange>,
}

#[cfg(test)]
mod tests {
    use super::{ChangeRecord, Stock};

    fn stock(code: &str, name: &str, currency: Option<&str>) -> Stock {
        Stock {
            code: code.to_string(),
            name: name.to_string(),
            currency: currency.map(str::to_string),
        }
    }

    #[test]
    fn stock_cells_fill_missing_currency() {
        assert_eq!(
            stock("00700", "腾讯控股", None).cells(),
            vec!["00700", "腾讯控股", "Unknown"]
        );
    }

    #[test]
    fn change_summary_lists_added_and_removed() {
        let record = ChangeRecord {
            date: "2026-01-07".to_string(),
            timestamp: "2026-01-07T18:00:00".to_string(),
            old_total: 3,
            new_total: 3,
            net_change: 0,
            added: vec![stock("00700", "腾讯控股", Some("HKD"))],
            removed: vec![stock("00003", "香港中华煤气", Some("HKD"))],
        };

        let summary = record.summary();
        assert!(summary.starts_with("更新日期: 2026-01-07\n总数变化: 3 → 3 (+0)"));
        assert!(summary.contains("新增 1 只股票:\n  [00700] 腾讯控股 (HKD)"));
        assert!(summary.ends_with("移除 1 只股票:\n  [00003] 香港中华煤气"));
    }
}
