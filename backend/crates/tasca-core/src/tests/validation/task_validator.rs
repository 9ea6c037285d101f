use crate::TaskValidator;

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_title_within_bounds_when_validated_then_ok() {
    assert_that!(TaskValidator::validate_title("abc"), ok(anything()));
    assert_that!(TaskValidator::validate_title(&"a".repeat(50)), ok(anything()));
}

#[test]
fn given_title_too_short_after_trim_when_validated_then_error() {
    let result = TaskValidator::validate_title("  ab   ");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().field(), some(eq("title")));
}

#[test]
fn given_title_too_long_when_validated_then_error() {
    assert_that!(TaskValidator::validate_title(&"a".repeat(51)), err(anything()));
}

#[test]
fn given_multibyte_title_when_validated_then_counts_characters() {
    // 50 characters, 100 bytes
    assert_that!(TaskValidator::validate_title(&"é".repeat(50)), ok(anything()));
}

#[test]
fn given_description_over_limit_when_validated_then_error() {
    let long = "x".repeat(501);

    assert_that!(
        TaskValidator::validate_description(Some(&long)),
        err(anything())
    );
    assert_that!(TaskValidator::validate_description(None), ok(anything()));
}

#[test]
fn given_description_padded_to_limit_when_validated_then_trimmed_length_counts() {
    let padded = format!("   {}   ", "x".repeat(500));

    assert_that!(
        TaskValidator::validate_description(Some(&padded)),
        ok(anything())
    );
}

#[test]
fn given_negative_numbers_when_validated_then_error() {
    assert_that!(TaskValidator::validate_cost(-0.01), err(anything()));
    assert_that!(TaskValidator::validate_hours_estimated(-1.0), err(anything()));
    assert_that!(TaskValidator::validate_hours_real(Some(-1.0)), err(anything()));
}

#[test]
fn given_zero_values_when_validated_then_ok() {
    assert_that!(TaskValidator::validate_cost(0.0), ok(anything()));
    assert_that!(TaskValidator::validate_hours_estimated(0.0), ok(anything()));
    assert_that!(TaskValidator::validate_hours_real(Some(0.0)), ok(anything()));
    assert_that!(TaskValidator::validate_hours_real(None), ok(anything()));
}

#[test]
fn test_image_url_pattern() {
    assert!(TaskValidator::is_valid_image_url("https://example.com/a.png"));
    assert!(TaskValidator::is_valid_image_url("http://x"));
    assert!(!TaskValidator::is_valid_image_url("ftp://x"));
    assert!(!TaskValidator::is_valid_image_url("not a url"));
    assert!(!TaskValidator::is_valid_image_url("https://exa mple.com"));
    assert!(!TaskValidator::is_valid_image_url("https://"));
}

#[test]
fn given_empty_image_when_validated_then_treated_as_absent() {
    assert_that!(TaskValidator::validate_image(Some("")), ok(anything()));
    assert_that!(TaskValidator::validate_image(None), ok(anything()));
    assert_that!(TaskValidator::validate_image(Some("ftp://x")), err(anything()));
}

#[test]
fn given_completed_without_finish_date_when_validated_then_error() {
    let result = TaskValidator::validate_completion(true, None);

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().field(), some(eq("finished_at")));
}

#[test]
fn given_completed_with_finish_date_when_validated_then_ok() {
    let now = Utc::now();

    assert_that!(
        TaskValidator::validate_completion(true, Some(&now)),
        ok(anything())
    );
    assert_that!(TaskValidator::validate_completion(false, None), ok(anything()));
}
