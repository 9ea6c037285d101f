use crate::CreateTaskRequest;

use proptest::prelude::*;

fn request(title: &str, cost: f64, hours_estimated: f64) -> CreateTaskRequest {
    CreateTaskRequest {
        title: Some(title.to_string()),
        cost: Some(cost),
        hours_estimated: Some(hours_estimated),
        ..Default::default()
    }
}

// =========================================================================
// Property-Based Tests - Create Validation
// =========================================================================

proptest! {
    #[test]
    fn given_title_within_bounds_when_validated_then_succeeds(title in "[a-zA-Z0-9]{3,50}") {
        prop_assert!(request(&title, 0.0, 0.0).into_new_task().is_ok());
    }

    #[test]
    fn given_title_too_long_when_validated_then_fails(title in "[a-zA-Z0-9]{51,120}") {
        prop_assert!(request(&title, 0.0, 0.0).into_new_task().is_err());
    }

    #[test]
    fn given_title_too_short_when_validated_then_fails(title in "[a-zA-Z0-9]{1,2}") {
        prop_assert!(request(&title, 0.0, 0.0).into_new_task().is_err());
    }

    #[test]
    fn given_padded_title_when_validated_then_length_counts_trimmed(
        title in "[a-z]{3,50}",
        padding in " {0,20}",
    ) {
        let padded = format!("{padding}{title}{padding}");
        prop_assert!(request(&padded, 0.0, 0.0).into_new_task().is_ok());
    }

    #[test]
    fn given_negative_cost_when_validated_then_fails(cost in -1.0e9f64..-1.0e-9) {
        prop_assert!(request("Valid title", cost, 1.0).into_new_task().is_err());
    }

    #[test]
    fn given_negative_estimate_when_validated_then_fails(hours in -1.0e6f64..-1.0e-9) {
        prop_assert!(request("Valid title", 1.0, hours).into_new_task().is_err());
    }

    #[test]
    fn given_non_negative_numbers_when_validated_then_succeeds(
        cost in 0.0f64..1.0e9,
        hours in 0.0f64..1.0e6,
        hours_real in 0.0f64..1.0e6,
    ) {
        let req = CreateTaskRequest {
            hours_real: Some(hours_real),
            ..request("Valid title", cost, hours)
        };
        prop_assert!(req.into_new_task().is_ok());
    }

    #[test]
    fn given_http_url_when_validated_then_image_accepted(
        scheme in prop_oneof![Just("http"), Just("https")],
        rest in "[a-z0-9./_-]{1,40}",
    ) {
        let req = CreateTaskRequest {
            image: Some(format!("{scheme}://{rest}")),
            ..request("Valid title", 1.0, 1.0)
        };
        prop_assert!(req.into_new_task().is_ok());
    }

    #[test]
    fn given_other_scheme_when_validated_then_image_rejected(
        scheme in prop_oneof![Just("ftp"), Just("file"), Just("data")],
        rest in "[a-z0-9./_-]{1,40}",
    ) {
        let req = CreateTaskRequest {
            image: Some(format!("{scheme}://{rest}")),
            ..request("Valid title", 1.0, 1.0)
        };
        prop_assert!(req.into_new_task().is_err());
    }

    #[test]
    fn given_url_with_whitespace_when_validated_then_image_rejected(
        head in "[a-z]{1,10}",
        tail in "[a-z]{1,10}",
    ) {
        let req = CreateTaskRequest {
            image: Some(format!("https://{head} {tail}")),
            ..request("Valid title", 1.0, 1.0)
        };
        prop_assert!(req.into_new_task().is_err());
    }
}
