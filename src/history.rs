//! Filters and orders the transaction history for display.

use time::Date;

use crate::models::{Transaction, TransactionKind};

/// How the transaction history should be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most recent first.
    #[default]
    ShowAll,
    /// Income records first, otherwise keeping the existing order.
    Category,
    /// Largest amount first.
    Price,
}

impl SortMode {
    /// Parse the sort mode from its display label, falling back to
    /// [SortMode::ShowAll] for unknown labels.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Category" => SortMode::Category,
            "Price" => SortMode::Price,
            _ => SortMode::ShowAll,
        }
    }
}

/// The filter and ordering settings for the transaction history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryQuery {
    /// Keep transactions whose name contains this text, ignoring case. The
    /// empty string keeps everything.
    pub search_query: String,
    /// Keep transactions on or after this date.
    pub start_date: Option<Date>,
    /// Keep transactions up to the end of this date.
    pub end_date: Option<Date>,
    /// How to order the result.
    pub sort_mode: SortMode,
}

/// Apply `query` to `transactions`, returning a new ordered list.
///
/// The input is never modified, so refining a filter re-applies it to the
/// same source collection.
pub fn filter_and_sort(transactions: &[Transaction], query: &HistoryQuery) -> Vec<Transaction> {
    let search_query = query.search_query.to_lowercase();

    let mut results: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| {
            search_query.is_empty()
                || transaction.name.to_lowercase().contains(&search_query)
        })
        .filter(|transaction| {
            // Comparing calendar dates makes both bounds inclusive, with the
            // upper bound covering the whole of `end_date`.
            let date = transaction.date.date();

            query.start_date.is_none_or(|start| date >= start)
                && query.end_date.is_none_or(|end| date <= end)
        })
        .cloned()
        .collect();

    match query.sort_mode {
        SortMode::ShowAll => results.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::Category => {
            results.sort_by_key(|transaction| transaction.kind != TransactionKind::Income)
        }
        SortMode::Price => results.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
    }

    results
}
