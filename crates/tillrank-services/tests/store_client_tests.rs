use chrono::{NaiveDate, Utc};
use httpmock::prelude::*;
use serde_json::json;

use tillrank_services::{
    Employee, EvaluationMetrics, EvaluationRecord, Rank, ReportOutcome, StoreClient, StoreError,
};

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(server.url("/exec"))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn get_employees_decodes_success_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getEmployees");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "success": true,
                "data": [
                    {"code": "E001", "name": "Amal", "title": "Cashier"},
                    {"code": "E002", "name": "Basem", "title": "Senior Cashier"}
                ]
            }));
    });

    let employees = client_for(&server).get_employees().unwrap();

    mock.assert();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].code, "E001");
    assert_eq!(employees[1].title, "Senior Cashier");
}

#[test]
fn store_error_field_wins_over_everything_else() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getEmployees");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true, "data": [], "error": "Sheet not found"}));
    });

    let err = client_for(&server).get_employees().unwrap_err();
    match err {
        StoreError::Store(msg) => assert!(msg.contains("Sheet not found")),
        other => panic!("expected Store error, got {:?}", other),
    }
}

#[test]
fn missing_success_flag_is_a_bad_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getEmployees");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": []}));
    });

    let err = client_for(&server).get_employees().unwrap_err();
    assert!(matches!(err, StoreError::BadEnvelope));
}

#[test]
fn login_sends_credentials_as_query_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "login")
            .query_param("email", "manager@example.com")
            .query_param("password", "p@ss word");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true}));
    });

    let accepted = client_for(&server)
        .login("manager@example.com", "p@ss word")
        .unwrap();

    mock.assert();
    assert!(accepted);
}

#[test]
fn login_rejection_is_ok_false_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/exec").query_param("action", "login");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": false}));
    });

    let accepted = client_for(&server).login("manager@example.com", "wrong").unwrap();
    assert!(!accepted);
}

#[test]
fn get_performance_ranks_rows_by_score() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getPerformance")
            .query_param("startDate", "2025-03-01")
            .query_param("endDate", "2025-03-31");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "success": true,
                "data": [
                    {"name": "Carol", "shortageAmount": 0.0, "surplusAmount": 0.0,
                     "missingExitReceipts": 0, "cancelAmount": 0.0, "score": 70.0},
                    {"name": "Amal", "shortageAmount": 0.0, "surplusAmount": 0.0,
                     "missingExitReceipts": 0, "cancelAmount": 0.0, "score": 95.0},
                    {"name": "Basem", "shortageAmount": 0.0, "surplusAmount": 0.0,
                     "missingExitReceipts": 0, "cancelAmount": 0.0, "score": 95.0},
                    {"name": "Dina", "shortageAmount": 0.0, "surplusAmount": 0.0,
                     "missingExitReceipts": 0, "cancelAmount": 0.0, "score": 40.0}
                ]
            }));
    });

    let outcome = client_for(&server)
        .get_performance(date("2025-03-01"), date("2025-03-31"))
        .unwrap();

    mock.assert();
    let ReportOutcome::Ranked(rows) = outcome else {
        panic!("expected ranked rows");
    };
    let names: Vec<&str> = rows.iter().map(|r| r.row.name.as_str()).collect();
    assert_eq!(names, vec!["Amal", "Basem", "Carol", "Dina"]);
    assert_eq!(rows[0].rank, Rank::First);
    assert_eq!(rows[2].rank, Rank::Third);
}

#[test]
fn performance_message_envelope_is_no_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getPerformance");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "No evaluations in this period"}));
    });

    let outcome = client_for(&server)
        .get_performance(date("2025-03-01"), date("2025-03-31"))
        .unwrap();

    assert_eq!(
        outcome,
        ReportOutcome::NoData("No evaluations in this period".to_string())
    );
}

#[test]
fn performance_empty_data_is_no_data_with_default_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getPerformance");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true, "data": []}));
    });

    let outcome = client_for(&server)
        .get_performance(date("2025-03-01"), date("2025-03-31"))
        .unwrap();

    assert!(matches!(outcome, ReportOutcome::NoData(_)));
}

#[test]
fn performance_rows_without_scores_are_scored_locally() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getPerformance");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "success": true,
                "data": [
                    {"name": "Amal", "shortageAmount": 200.0, "surplusAmount": 0.0,
                     "missingExitReceipts": 0, "cancelAmount": 0.0}
                ]
            }));
    });

    let outcome = client_for(&server)
        .get_performance(date("2025-03-01"), date("2025-03-31"))
        .unwrap();

    let ReportOutcome::Ranked(rows) = outcome else {
        panic!("expected ranked rows");
    };
    assert_eq!(rows[0].score, 90.0);
}

#[test]
fn submit_posts_record_with_store_field_names() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .json_body_partial(
                json!({
                    "employeeCode": "E001",
                    "employeeName": "Amal",
                    "employeeTitle": "Cashier",
                    "shortageAmount": 150.0,
                    "surplusAmount": 0.0,
                    "exitSheetMissing": 2,
                    "cancelAmount": 25.0
                })
                .to_string(),
            );
        then.status(200).body("ignored");
    });

    let employee = Employee {
        code: "E001".to_string(),
        name: "Amal".to_string(),
        title: "Cashier".to_string(),
    };
    let record = EvaluationRecord::new(
        &employee,
        EvaluationMetrics {
            shortage_amount: 150.0,
            surplus_amount: 0.0,
            missing_exit_receipts: 2,
            cancel_amount: 25.0,
        },
        Utc::now(),
    );

    client_for(&server).submit_evaluation(&record).unwrap();
    mock.assert();
}

#[test]
fn connection_failure_maps_to_connection_refused() {
    // Nothing listens on this port.
    let client = StoreClient::new("http://127.0.0.1:1/exec");
    let err = client.get_employees().unwrap_err();
    assert!(matches!(err, StoreError::ConnectionRefused));
}

#[test]
fn async_fetch_delivers_result_over_channel() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/exec")
            .query_param("action", "getEmployees");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "success": true,
                "data": [{"code": "E001", "name": "Amal", "title": "Cashier"}]
            }));
    });

    let rx = client_for(&server).get_employees_async();
    let employees = rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .expect("worker should respond")
        .expect("fetch should succeed");

    assert_eq!(employees.len(), 1);
}
