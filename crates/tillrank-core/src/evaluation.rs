//! Evaluation records - one submitted set of metrics per employee per date

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::error::{Result, TillRankError};

/// The four raw metrics an evaluation is scored on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationMetrics {
    pub shortage_amount: f64,
    pub surplus_amount: f64,
    pub missing_exit_receipts: u32,
    pub cancel_amount: f64,
}

/// One evaluation as POSTed to the store. Immutable once sent; the store is
/// the sole system of record.
///
/// The receipt count goes out as `exitSheetMissing` - that is the field name
/// the store's append action expects on the write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub employee_name: String,
    pub employee_code: String,
    pub employee_title: String,
    pub shortage_amount: f64,
    pub surplus_amount: f64,
    #[serde(rename = "exitSheetMissing")]
    pub missing_exit_receipts: u32,
    pub cancel_amount: f64,
    pub date: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn new(employee: &Employee, metrics: EvaluationMetrics, date: DateTime<Utc>) -> Self {
        Self {
            employee_name: employee.name.clone(),
            employee_code: employee.code.clone(),
            employee_title: employee.title.clone(),
            shortage_amount: metrics.shortage_amount,
            surplus_amount: metrics.surplus_amount,
            missing_exit_receipts: metrics.missing_exit_receipts,
            cancel_amount: metrics.cancel_amount,
            date,
        }
    }

    pub fn metrics(&self) -> EvaluationMetrics {
        EvaluationMetrics {
            shortage_amount: self.shortage_amount,
            surplus_amount: self.surplus_amount,
            missing_exit_receipts: self.missing_exit_receipts,
            cancel_amount: self.cancel_amount,
        }
    }
}

/// Parse an amount field from form input. Empty means 0.
pub fn parse_amount(field: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Ok(v),
        _ => Err(TillRankError::InvalidNumber {
            field: field.to_string(),
            value: input.to_string(),
        }),
    }
}

/// Parse a count field from form input. Empty means 0.
pub fn parse_count(field: &str, input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| TillRankError::InvalidNumber {
            field: field.to_string(),
            value: input.to_string(),
        })
}
