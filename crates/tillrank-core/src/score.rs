//! Performance scoring - pure mapping from raw metrics to a 0-100 score

use crate::evaluation::EvaluationMetrics;

/// Cap on the shortage deduction.
pub const SHORTAGE_CAP: f64 = 40.0;
/// Cap on the surplus deduction.
pub const SURPLUS_CAP: f64 = 20.0;
/// Cap on the missing-exit-receipts deduction.
pub const RECEIPT_CAP: f64 = 25.0;
/// Cap on the cancellation deduction.
pub const CANCEL_CAP: f64 = 15.0;

/// Compute the 0-100 performance score for one set of metrics.
///
/// Starts at 100 and subtracts four independently capped deductions, then
/// rounds to the nearest integer. Deductions are non-negative so the result
/// never exceeds 100; the floor at 0 is explicit.
pub fn score(metrics: &EvaluationMetrics) -> u8 {
    let mut score = 100.0;

    let shortage_deduction = (metrics.shortage_amount / 100.0 * 5.0).min(SHORTAGE_CAP);
    score -= shortage_deduction;

    let surplus_deduction = (metrics.surplus_amount / 100.0 * 2.0).min(SURPLUS_CAP);
    score -= surplus_deduction;

    let receipt_deduction = (f64::from(metrics.missing_exit_receipts) * 5.0).min(RECEIPT_CAP);
    score -= receipt_deduction;

    let cancel_deduction = (metrics.cancel_amount / 100.0).min(CANCEL_CAP);
    score -= cancel_deduction;

    score.round().max(0.0) as u8
}
