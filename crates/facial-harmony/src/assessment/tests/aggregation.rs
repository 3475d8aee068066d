use super::common::*;
use crate::assessment::{
    aggregate_front, aggregate_side, Ancestry, AssessmentError, BandMatch, ProfileKind, Sex,
    Subject, NO_ADVICE,
};
use serde_json::{json, Value};

#[test]
fn ideal_side_profile_scores_full_marks() {
    let result = aggregate_side(&male_other(), &ideal_side());

    assert_eq!(result.profile, ProfileKind::Side);
    assert_eq!(result.measurements.len(), 23);
    assert!(result
        .measurements
        .iter()
        .all(|m| m.matched == BandMatch::Band(0) && m.advice == NO_ADVICE));
    let ideal_sum: f64 = result.measurements.iter().map(|m| m.max_score).sum();
    assert_eq!(result.total_score, ideal_sum);
    assert_eq!(result.total_score, 194.5);
    assert_close(result.percentage, 100.0);
}

#[test]
fn ideal_front_profile_scores_full_marks() {
    let result = aggregate_front(&male_other(), &ideal_front());

    assert_eq!(result.profile, ProfileKind::Front);
    assert_eq!(result.measurements.len(), 22);
    assert!(result.measurements.iter().all(|m| m.matched.is_ideal()));
    assert_eq!(result.total_score, 305.5);
    assert_close(result.percentage, 100.0);
}

#[test]
fn measurements_follow_declared_order() {
    let side = aggregate_side(&male_other(), &ideal_side());
    let names: Vec<&str> = side.measurements.iter().map(|m| m.measurement).collect();
    assert_eq!(names[0], "Gonial angle(°)");
    assert_eq!(names[8], "Orbital vector");
    assert_eq!(names[14], "Ricketts' E line");
    assert_eq!(names[17], "Burstone line");
    assert_eq!(names[19], "Gonion to mouth relationship");
    assert_eq!(names[20], "Recession relative to frankfort plane");
    assert_eq!(names[22], "Nasal tip angle (°)");

    let front = aggregate_front(&male_other(), &ideal_front());
    assert_eq!(front.measurements[1].measurement, "Facial thirds (%)");
    assert_eq!(front.measurements[8].measurement, "Chin to philtrum ratio");
    assert_eq!(
        front.measurements[16].measurement,
        "Deviation of IAA(Ipsilateral alar angle) & JFA(Jaw frontal angle)"
    );
}

#[test]
fn totals_are_the_ordered_sum_for_every_subject() {
    for subject in every_subject() {
        let result = aggregate_side(&subject, &uneven_side());
        let mut expected = 0.0;
        for measurement in &result.measurements {
            expected += measurement.score;
        }
        assert_eq!(result.total_score, expected);
        assert_eq!(result.percentage, expected / 194.5 * 100.0);

        let front = aggregate_front(&subject, &ideal_front());
        let expected: f64 = front.measurements.iter().map(|m| m.score).sum();
        assert_eq!(front.total_score, expected);
        assert_eq!(front.percentage, expected / 305.5 * 100.0);
    }
}

#[test]
fn uneven_side_inputs_land_where_expected() {
    let result = aggregate_side(&male_other(), &uneven_side());
    let by_name = |name: &str| {
        result
            .measurements
            .iter()
            .find(|m| m.measurement == name)
            .unwrap_or_else(|| panic!("missing {name}"))
    };

    assert_eq!(by_name("Gonial angle(°)").matched, BandMatch::Band(3));
    assert_eq!(by_name("Gonial angle(°)").score, 5.0);
    assert_eq!(by_name("Nasofrontal angle (°)").matched, BandMatch::Fallback);
    assert_eq!(by_name("Nasofrontal angle (°)").score, -15.0);
    assert_eq!(by_name("Orbital vector").score, 1.875);
    assert_eq!(by_name("Holdaway H line").score, 0.0);
    assert_eq!(by_name("Gonion to mouth relationship").score, -5.0);
    assert_eq!(by_name("Nasal tip angle (°)").score, -4.0);
    assert!(result.total_score < 194.5);
}

#[test]
fn aggregation_is_idempotent() {
    let subject = Subject::new(Sex::Female, Ancestry::SouthAsian);
    let first = aggregate_side(&subject, &uneven_side());
    let second = aggregate_side(&subject, &uneven_side());
    assert_eq!(first, second);
    assert_eq!(first.total_score.to_bits(), second.total_score.to_bits());
}

#[test]
fn report_uses_external_field_names() {
    let report = aggregate_side(&male_other(), &ideal_side()).report();
    let value = serde_json::to_value(&report).expect("report serializes");
    let object = value.as_object().expect("report is an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "advice",
            "current_values",
            "mark",
            "max_scores",
            "measurement_names",
            "notes",
            "percent",
            "ranges",
            "scores",
        ]
    );
    for column in ["scores", "notes", "max_scores", "ranges", "current_values", "advice"] {
        assert_eq!(object[column].as_array().map(Vec::len), Some(23), "{column}");
    }
    assert_eq!(value["mark"], json!(194.5));
    assert_eq!(value["ranges"][0], json!([112.0, 123.0]));
    assert_eq!(value["ranges"][8], json!("Positive"));
    assert_eq!(value["current_values"][8], json!("positive"));
    assert_eq!(value["advice"][0], json!("N/A"));
}

#[test]
fn front_report_echoes_thirds_as_array() {
    let report = aggregate_front(&male_other(), &ideal_front()).report();
    let value: Value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["current_values"][1], json!([33.5, 33.5, 33.0]));
    assert_eq!(report.measurement_names.len(), 22);
}

#[test]
fn request_rejects_unknown_descriptor_values() {
    let bad_gender = side_request(2, "Other", ideal_side());
    match bad_gender.assess() {
        Err(AssessmentError::InvalidArgument { field, .. }) => assert_eq!(field, "gender"),
        other => panic!("expected invalid gender, got {other:?}"),
    }

    let bad_ancestry = front_request(0, "Atlantean", ideal_front());
    match bad_ancestry.assess() {
        Err(AssessmentError::InvalidArgument { field, .. }) => assert_eq!(field, "racial"),
        other => panic!("expected invalid ancestry, got {other:?}"),
    }
}

#[test]
fn request_rejects_non_finite_measurements() {
    let mut measurements = ideal_front();
    measurements.facial_thirds = [33.0, f64::NAN, 34.0];
    match front_request(1, "Other", measurements).assess() {
        Err(AssessmentError::InvalidArgument { field, .. }) => assert_eq!(field, "facialThirds"),
        other => panic!("expected invalid thirds, got {other:?}"),
    }

    let measurements = crate::assessment::SideMeasurements {
        nasal_tip_angle: f64::INFINITY,
        ..ideal_side()
    };
    match side_request(1, "Other", measurements).assess() {
        Err(AssessmentError::InvalidArgument { field, .. }) => assert_eq!(field, "nasalTipAngle"),
        other => panic!("expected invalid nasal tip angle, got {other:?}"),
    }
}

#[test]
fn request_assess_matches_direct_aggregation() {
    let request = side_request(1, "east asian", uneven_side());
    let subject = Subject::new(Sex::Male, Ancestry::EastAsian);
    let expected = aggregate_side(&subject, &uneven_side());
    assert_eq!(request.assess().expect("request is valid"), expected);
}
