use axum::http::StatusCode;
use client::api::JOBS_PATH;
use client::{add_job, login, SubmitOutcome};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Destination, JobForm, LoginForm};

use crate::common::{self, ADMIN_EMAIL, ADMIN_PASSWORD, MANAGER_EMAIL, MANAGER_PASSWORD};

async fn signed_in(email: &str, password: &str) -> (common::MockBackend, client::HttpApi) {
    let (backend, api) = common::test_backend().await;
    let credentials = LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    };
    login::submit(&api, &credentials).await;
    (backend, api)
}

fn fix_roof() -> JobForm {
    JobForm {
        title: "Fix Roof".into(),
        description: "Replace broken tiles".into(),
        start_date: "2024-01-01".into(),
        predicted_duration: "3".into(),
        notes: "1".into(),
    }
}

#[tokio::test]
async fn admin_adds_job_with_derived_end_date() {
    let (backend, api) = signed_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let outcome = add_job::submit(&api, &fix_roof()).await;
    assert_eq!(outcome, SubmitOutcome::Navigate(Destination::home()));

    assert_eq!(
        backend.created_jobs(),
        vec![json!({
            "title": "Fix Roof",
            "description": "Replace broken tiles",
            "start_date": "2024-01-01",
            "predicted_duration": 3,
            "end_date": "2024-01-04",
            "notes": "1",
            "status": "pending"
        })]
    );
}

#[tokio::test]
async fn manager_adds_job() {
    let (backend, api) = signed_in(MANAGER_EMAIL, MANAGER_PASSWORD).await;
    let form = JobForm {
        notes: "2".into(),
        ..fix_roof()
    };

    assert_eq!(
        add_job::submit(&api, &form).await,
        SubmitOutcome::Navigate(Destination::home())
    );
    assert_eq!(backend.created_jobs()[0]["notes"], "2");
}

#[tokio::test]
async fn end_date_rolls_over_month_and_leap_day() {
    let (backend, api) = signed_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let month_end = JobForm {
        start_date: "2024-01-30".into(),
        ..fix_roof()
    };
    let leap = JobForm {
        start_date: "2024-02-27".into(),
        predicted_duration: "2".into(),
        ..fix_roof()
    };
    add_job::submit(&api, &month_end).await;
    add_job::submit(&api, &leap).await;

    let jobs = backend.created_jobs();
    assert_eq!(jobs[0]["end_date"], "2024-02-02");
    assert_eq!(jobs[1]["end_date"], "2024-02-29");
}

#[tokio::test]
async fn long_description_never_reaches_backend() {
    let (backend, api) = signed_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let form = JobForm {
        description: "one two three four five six seven eight nine ten eleven".into(),
        ..fix_roof()
    };

    let outcome = add_job::submit(&api, &form).await;
    assert_eq!(outcome.error(), Some("Description must be 10 words or less"));
    assert_eq!(backend.calls_to(JOBS_PATH), 0);
}

#[tokio::test]
async fn ten_word_description_is_accepted() {
    let (backend, api) = signed_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let form = JobForm {
        description: "one two three four five six seven eight nine ten".into(),
        ..fix_roof()
    };

    assert!(matches!(
        add_job::submit(&api, &form).await,
        SubmitOutcome::Navigate(_)
    ));
    assert_eq!(backend.calls_to(JOBS_PATH), 1);
}

#[tokio::test]
async fn backend_rejection_message_is_shown() {
    let (backend, api) = signed_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    backend.reply(
        JOBS_PATH,
        StatusCode::BAD_REQUEST,
        json!({ "error": "Start date is in the past" }),
    );

    let outcome = add_job::submit(&api, &fix_roof()).await;
    assert_eq!(outcome.error(), Some("Start date is in the past"));
}

#[tokio::test]
async fn signed_out_request_is_rejected_by_backend() {
    let (_backend, api) = common::test_backend().await;

    let outcome = add_job::submit(&api, &fix_roof()).await;
    assert_eq!(outcome.error(), Some("Not authenticated"));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let api = common::unreachable_api();
    let outcome = add_job::submit(&api, &fix_roof()).await;
    assert_eq!(outcome.error(), Some("Network error"));
}
