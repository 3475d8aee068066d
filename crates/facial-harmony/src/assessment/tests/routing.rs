use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::assessment::router::{front_mark_handler, side_mark_handler};
use crate::assessment::{assessment_router, ProfileReport};
use crate::error::AppError;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn side_handler_returns_report() {
    let request = side_request(1, "Other", ideal_side());
    let Json(report) = side_mark_handler(Json(request))
        .await
        .expect("assessment succeeds");

    assert_eq!(report.mark, 194.5);
    assert_eq!(report.scores.len(), 23);
    assert!(report.advice.iter().all(|advice| advice == "N/A"));
}

#[tokio::test]
async fn front_handler_rejects_unknown_gender() {
    let request = front_request(5, "Other", ideal_front());
    match front_mark_handler(Json(request)).await {
        Err(AppError::Assessment(error)) => assert!(error.to_string().contains("gender")),
        Err(other) => panic!("expected assessment error, got {other:?}"),
        Ok(_) => panic!("expected assessment error, got a report"),
    }
}

#[tokio::test]
async fn legacy_side_route_accepts_camel_case_body() {
    let body = serde_json::to_value(side_request(1, "Other", ideal_side())).expect("serializes");
    assert_eq!(body["gonialAngle"], json!(117.5));
    assert_eq!(body["recessionRelative2FrankfortPlane"], json!("none"));

    let response = assessment_router()
        .oneshot(post_json("/getsidemark", &body))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    let report: ProfileReport = serde_json::from_value(payload).expect("report shape");
    assert_eq!(report.mark, 194.5);
    assert_close(report.percent, 100.0);
    assert_eq!(report.measurement_names[0], "Gonial angle(°)");
}

#[tokio::test]
async fn versioned_front_route_matches_legacy_route() {
    let body =
        serde_json::to_value(front_request(0, "Hispanic", ideal_front())).expect("serializes");

    let legacy = assessment_router()
        .oneshot(post_json("/getfrontmark", &body))
        .await
        .expect("router responds");
    let versioned = assessment_router()
        .oneshot(post_json("/api/v1/assessments/front", &body))
        .await
        .expect("router responds");

    assert_eq!(legacy.status(), StatusCode::OK);
    assert_eq!(versioned.status(), StatusCode::OK);
    assert_eq!(read_json(legacy).await, read_json(versioned).await);
}

#[tokio::test]
async fn unknown_ancestry_is_unprocessable() {
    let mut body =
        serde_json::to_value(side_request(1, "Other", ideal_side())).expect("serializes");
    body["racial"] = json!("Atlantean");

    let response = assessment_router()
        .oneshot(post_json("/api/v1/assessments/side", &body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("racial"), "{message}");
}

#[tokio::test]
async fn thirds_must_have_three_values() {
    let mut body =
        serde_json::to_value(front_request(1, "Other", ideal_front())).expect("serializes");
    body["facialThirds"] = json!([50.0, 50.0]);

    let response = assessment_router()
        .oneshot(post_json("/getfrontmark", &body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_measurement_is_rejected() {
    let mut body =
        serde_json::to_value(side_request(1, "Other", ideal_side())).expect("serializes");
    body.as_object_mut()
        .expect("object body")
        .remove("nasalTipAngle");

    let response = assessment_router()
        .oneshot(post_json("/getsidemark", &body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
