// Domain modules
pub mod employee;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod score;
pub mod session;

pub use employee::{Employee, EmployeeList};
pub use error::{Result, TillRankError};
pub use evaluation::{parse_amount, parse_count, EvaluationMetrics, EvaluationRecord};
pub use report::{
    build_report, default_range, parse_range, rank, PerformanceRow, Rank, RankedRow, ReportModel,
    ReportOutcome, NO_DATA_MESSAGE,
};
pub use score::score;
pub use session::Session;

/// Root application models container
#[derive(Debug, Clone, Default)]
pub struct AppModels {
    pub employees: EmployeeList,
    pub report: ReportModel,
}

impl AppModels {
    pub fn new() -> Self {
        Self {
            employees: EmployeeList::new(),
            report: ReportModel::new(),
        }
    }
}
