use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use tillrank_core::{build_report, Employee, EvaluationRecord, PerformanceRow, ReportOutcome};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Spreadsheet-backed store deployment URL.
const SCRIPT_URL: &str =
    "https://script.google.com/macros/s/AKfycbwRt3o6GrqKLFJ2wmftVW4cMfUNQA8pEoHsyGWowXchrsn__VKE30h42Vk6PucPiZom_Q/exec";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("JSON parse failed: {0}")]
    Json(#[from] std::io::Error),
    #[error("{0}")]
    Store(String),
    #[error("Invalid response format")]
    BadEnvelope,
    #[error("Connection refused - is the store reachable?")]
    ConnectionRefused,
}

#[derive(Debug, Deserialize)]
struct EmployeesResponse {
    success: Option<bool>,
    data: Option<Vec<Employee>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: Option<bool>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PerformanceResponse {
    success: Option<bool>,
    data: Option<Vec<PerformanceRow>>,
    message: Option<String>,
    error: Option<String>,
}

/// Client for the spreadsheet-backed evaluation store. All reads share the
/// same envelope rules: a store-reported `error` always wins, then
/// `success`/`data` are checked, anything else is a bad envelope.
pub struct StoreClient {
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn default_url() -> Self {
        Self::new(SCRIPT_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    pub fn get_employees(&self) -> Result<Vec<Employee>, StoreError> {
        debug!("Fetching employees from store");

        let response = ureq::get(&self.base_url)
            .query("action", "getEmployees")
            .timeout(REQUEST_TIMEOUT)
            .call()
            .map_err(map_ureq_error)?;

        let envelope: EmployeesResponse = response.into_json()?;
        if let Some(message) = envelope.error {
            return Err(StoreError::Store(message));
        }
        let (Some(true), Some(employees)) = (envelope.success, envelope.data) else {
            return Err(StoreError::BadEnvelope);
        };

        info!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    /// Check credentials against the store. `Ok(false)` means the store
    /// rejected them; errors are transport or envelope problems.
    #[instrument(skip(self, password), fields(email = %email))]
    pub fn login(&self, email: &str, password: &str) -> Result<bool, StoreError> {
        debug!("Checking credentials against store");

        let response = ureq::get(&self.base_url)
            .query("action", "login")
            .query("email", email)
            .query("password", password)
            .timeout(REQUEST_TIMEOUT)
            .call()
            .map_err(map_ureq_error)?;

        let envelope: LoginResponse = response.into_json()?;
        if let Some(message) = envelope.error {
            return Err(StoreError::Store(message));
        }
        let Some(accepted) = envelope.success else {
            return Err(StoreError::BadEnvelope);
        };

        info!(accepted, "Login check complete");
        Ok(accepted)
    }

    #[instrument(skip(self), fields(start = %start, end = %end))]
    pub fn get_performance(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ReportOutcome, StoreError> {
        debug!("Fetching performance data from store");

        let response = ureq::get(&self.base_url)
            .query("action", "getPerformance")
            .query("startDate", &start.format("%Y-%m-%d").to_string())
            .query("endDate", &end.format("%Y-%m-%d").to_string())
            .timeout(REQUEST_TIMEOUT)
            .call()
            .map_err(map_ureq_error)?;

        let envelope: PerformanceResponse = response.into_json()?;
        if let Some(message) = envelope.error {
            return Err(StoreError::Store(message));
        }
        // An empty-but-valid range comes back as a bare message.
        if let Some(message) = envelope.message {
            info!("Store reported empty range");
            return Ok(ReportOutcome::NoData(message));
        }
        let (Some(true), Some(rows)) = (envelope.success, envelope.data) else {
            return Err(StoreError::BadEnvelope);
        };

        info!(count = rows.len(), "Fetched performance rows");
        Ok(build_report(rows))
    }

    /// Append one evaluation record. Fire-and-forget: the response body is
    /// never read, so server-side persistence failures are invisible here.
    #[instrument(skip(self, record), fields(employee = %record.employee_code))]
    pub fn submit_evaluation(&self, record: &EvaluationRecord) -> Result<(), StoreError> {
        debug!("Submitting evaluation record");

        ureq::post(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .send_json(record)
            .map_err(map_ureq_error)?;

        info!("Evaluation record sent");
        Ok(())
    }

    /// Fetch employees on a background thread, result delivered by channel.
    pub fn get_employees_async(&self) -> Receiver<Result<Vec<Employee>, StoreError>> {
        info!("Starting async employee fetch");
        let (tx, rx) = channel();
        let base_url = self.base_url.clone();

        thread::spawn(move || {
            let client = StoreClient::new(base_url);
            let result = client.get_employees();
            let _ = tx.send(result);
        });

        rx
    }

    /// Check credentials on a background thread.
    pub fn login_async(&self, email: &str, password: &str) -> Receiver<Result<bool, StoreError>> {
        info!("Starting async login");
        let (tx, rx) = channel();
        let base_url = self.base_url.clone();
        let email = email.to_string();
        let password = password.to_string();

        thread::spawn(move || {
            let client = StoreClient::new(base_url);
            let result = client.login(&email, &password);
            let _ = tx.send(result);
        });

        rx
    }

    /// Fetch the performance report on a background thread.
    pub fn get_performance_async(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Receiver<Result<ReportOutcome, StoreError>> {
        info!("Starting async performance fetch");
        let (tx, rx) = channel();
        let base_url = self.base_url.clone();

        thread::spawn(move || {
            let client = StoreClient::new(base_url);
            let result = client.get_performance(start, end);
            let _ = tx.send(result);
        });

        rx
    }

    /// Send one evaluation record on a background thread. There is no error
    /// channel back to the caller; transport failures are only logged.
    pub fn submit_evaluation_async(&self, record: EvaluationRecord) {
        info!(employee = %record.employee_code, "Starting async evaluation submit");
        let base_url = self.base_url.clone();

        thread::spawn(move || {
            let client = StoreClient::new(base_url);
            if let Err(e) = client.submit_evaluation(&record) {
                warn!("Evaluation submit failed: {}", e);
            }
        });
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::default_url()
    }
}

/// Map ureq errors to StoreError, detecting connection failures
fn map_ureq_error(e: ureq::Error) -> StoreError {
    let ureq::Error::Transport(ref t) = e else {
        error!("HTTP error: {}", e);
        return StoreError::Http(e);
    };

    if t.kind() == ureq::ErrorKind::ConnectionFailed {
        error!("Connection refused - store unreachable");
        return StoreError::ConnectionRefused;
    }

    error!("HTTP error: {}", e);
    StoreError::Http(e)
}
