mod services;
mod store;

pub use services::Services;
pub use store::{StoreClient, StoreError};

// Re-export core types for the GUI (the GUI should only import from services)
pub use tillrank_core::{
    build_report, default_range, parse_amount, parse_count, parse_range, rank, AppModels,
    Employee, EmployeeList, EvaluationMetrics, EvaluationRecord, PerformanceRow, Rank, RankedRow,
    ReportModel, ReportOutcome, Session, TillRankError, NO_DATA_MESSAGE,
};
