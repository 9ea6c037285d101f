use crate::CreateTaskRequest;
use crate::api::tasks::create_task_request::MISSING_FIELDS_MESSAGE;

use chrono::Utc;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

fn valid_request() -> CreateTaskRequest {
    CreateTaskRequest {
        title: Some("Write report".into()),
        cost: Some(120.0),
        hours_estimated: Some(6.0),
        ..Default::default()
    }
}

fn message_of(req: CreateTaskRequest) -> String {
    req.into_new_task().unwrap_err().message().to_string()
}

#[test]
fn given_minimal_request_when_into_new_task_then_defaults_applied() {
    // When
    let result = valid_request().into_new_task();

    // Then
    assert_that!(result, ok(anything()));
    let new_task = result.unwrap();
    assert_that!(new_task.title.as_str(), eq("Write report"));
    assert_that!(new_task.completed, eq(false));
    assert_that!(new_task.hours_real, none());
    assert_that!(new_task.image, none());
}

#[test]
fn given_missing_cost_when_into_new_task_then_missing_fields_error() {
    let req = CreateTaskRequest {
        cost: None,
        ..valid_request()
    };

    assert_that!(message_of(req).as_str(), eq(MISSING_FIELDS_MESSAGE));
}

#[test]
fn given_empty_title_when_into_new_task_then_treated_as_missing() {
    let req = CreateTaskRequest {
        title: Some(String::new()),
        ..valid_request()
    };

    assert_that!(message_of(req).as_str(), eq(MISSING_FIELDS_MESSAGE));
}

#[test]
fn given_whitespace_title_when_into_new_task_then_length_error() {
    let req = CreateTaskRequest {
        title: Some("     ".into()),
        ..valid_request()
    };

    let error = req.into_new_task().unwrap_err();

    assert_that!(error.message(), eq("Title must be between 3 and 50 characters"));
    assert_that!(error.field(), some(eq("title")));
}

#[test]
fn given_short_title_and_negative_cost_when_into_new_task_then_title_reported_first() {
    let req = CreateTaskRequest {
        title: Some("ab".into()),
        cost: Some(-1.0),
        ..valid_request()
    };

    assert_that!(
        message_of(req).as_str(),
        eq("Title must be between 3 and 50 characters")
    );
}

#[test]
fn given_negative_cost_and_bad_image_when_into_new_task_then_cost_reported_first() {
    let req = CreateTaskRequest {
        cost: Some(-5.0),
        image: Some("ftp://x".into()),
        ..valid_request()
    };

    assert_that!(message_of(req).as_str(), eq("Cost cannot be negative"));
}

#[test]
fn given_negative_real_hours_when_into_new_task_then_error() {
    let req = CreateTaskRequest {
        hours_real: Some(-0.5),
        ..valid_request()
    };

    assert_that!(message_of(req).as_str(), eq("Real hours cannot be negative"));
}

#[test]
fn given_completed_without_finish_date_when_into_new_task_then_error() {
    let req = CreateTaskRequest {
        completed: Some(true),
        ..valid_request()
    };

    let error = req.into_new_task().unwrap_err();

    assert_that!(error.field(), some(eq("finished_at")));
}

#[test]
fn given_completed_with_finish_date_when_into_new_task_then_ok() {
    let req = CreateTaskRequest {
        completed: Some(true),
        finished_at: Some(Utc::now()),
        ..valid_request()
    };

    assert_that!(req.into_new_task(), ok(anything()));
}

#[test]
fn given_empty_image_when_into_new_task_then_stored_without_image() {
    let req = CreateTaskRequest {
        image: Some(String::new()),
        ..valid_request()
    };

    let new_task = req.into_new_task().unwrap();

    assert_that!(new_task.image, none());
}

#[test]
fn given_json_with_unknown_keys_when_deserialized_then_ignored() {
    let req: CreateTaskRequest = serde_json::from_str(
        r#"{"title": "Paint fence", "cost": 10, "hours_estimated": 2, "owner": "someone"}"#,
    )
    .unwrap();

    assert_that!(req.into_new_task(), ok(anything()));
}

#[test]
fn given_json_without_hours_when_deserialized_then_missing_fields_error() {
    let req: CreateTaskRequest =
        serde_json::from_str(r#"{"title": "Paint fence", "cost": 10}"#).unwrap();

    assert_that!(req.into_new_task(), err(anything()));
}
