//! Performance report - ranking rows by score, date-range handling

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TillRankError};
use crate::evaluation::EvaluationMetrics;
use crate::score::score;

/// Shown when the store returns an empty data array for a valid range.
pub const NO_DATA_MESSAGE: &str = "No data found for the selected date range";

/// One employee's metrics for the requested range, as returned by the
/// `getPerformance` action. The score may be pre-computed by the store;
/// when it is absent we compute it locally with the same formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub name: String,
    pub shortage_amount: f64,
    pub surplus_amount: f64,
    pub missing_exit_receipts: u32,
    pub cancel_amount: f64,
    #[serde(default)]
    pub score: Option<f64>,
}

impl PerformanceRow {
    pub fn metrics(&self) -> EvaluationMetrics {
        EvaluationMetrics {
            shortage_amount: self.shortage_amount,
            surplus_amount: self.surplus_amount,
            missing_exit_receipts: self.missing_exit_receipts,
            cancel_amount: self.cancel_amount,
        }
    }

    /// Server-supplied score when present, otherwise computed locally.
    pub fn effective_score(&self) -> f64 {
        self.score
            .unwrap_or_else(|| f64::from(score(&self.metrics())))
    }
}

/// Visual rank for the top three table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
    Unranked,
}

impl Rank {
    fn from_position(position: usize) -> Self {
        match position {
            1 => Rank::First,
            2 => Rank::Second,
            3 => Rank::Third,
            _ => Rank::Unranked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// 1-based table position.
    pub position: usize,
    pub rank: Rank,
    pub score: f64,
    pub row: PerformanceRow,
}

/// What the report view shows: ranked rows, or a single no-data row.
/// An empty-but-valid range is a user-visible state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Ranked(Vec<RankedRow>),
    NoData(String),
}

/// Order rows by score descending. The sort is stable, so ties keep the
/// store's row order.
pub fn rank(rows: Vec<PerformanceRow>) -> Vec<RankedRow> {
    let mut scored: Vec<(f64, PerformanceRow)> =
        rows.into_iter().map(|r| (r.effective_score(), r)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, row))| RankedRow {
            position: i + 1,
            rank: Rank::from_position(i + 1),
            score,
            row,
        })
        .collect()
}

/// Build the report outcome for a fetched row set.
pub fn build_report(rows: Vec<PerformanceRow>) -> ReportOutcome {
    if rows.is_empty() {
        return ReportOutcome::NoData(NO_DATA_MESSAGE.to_string());
    }
    ReportOutcome::Ranked(rank(rows))
}

/// Parse and validate a report date range from form input.
pub fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start_date = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
        .map_err(|_| TillRankError::InvalidDate(start.to_string()))?;
    let end_date = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
        .map_err(|_| TillRankError::InvalidDate(end.to_string()))?;
    Ok((start_date, end_date))
}

/// Default report range: first day of the current month through today.
pub fn default_range() -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let first = today.with_day(1).unwrap_or(today);
    (first, today)
}

/// Report view state owned by the app.
#[derive(Debug, Clone, Default)]
pub struct ReportModel {
    pub loading: bool,
    pub outcome: Option<ReportOutcome>,
    pub error: Option<String>,
}

impl ReportModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn set_outcome(&mut self, outcome: ReportOutcome) {
        self.outcome = Some(outcome);
        self.error = None;
        self.loading = false;
    }

    /// A failed fetch keeps the previous outcome on screen; only the error
    /// row and the toast change.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
