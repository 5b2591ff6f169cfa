use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use super::common::{failing_bathroom_request, read_json_body, router};

fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn audit_endpoint_returns_full_report() {
    let payload = serde_json::to_value(failing_bathroom_request()).expect("serializes");
    let response = router()
        .oneshot(json_request("/api/v1/audits", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["space_id"], "ROOM-101");
    assert_eq!(body["overall"], "fail");
    assert_eq!(body["verdicts"].as_array().expect("verdict array").len(), 4);
    assert!(!body["remediation"].as_array().expect("remediation").is_empty());
}

#[tokio::test]
async fn audit_endpoint_rejects_invalid_measurements() {
    let mut request = failing_bathroom_request();
    request.lux = -1.0;
    let payload = serde_json::to_value(request).expect("serializes");

    let response = router()
        .oneshot(json_request("/api/v1/audits", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("invalid input"));
}

#[tokio::test]
async fn batch_endpoint_audits_each_row() {
    let csv = "space_id,zone,slope_ratio,dcof,r_value,lux,adjacent_lux,turning_diameter_mm\n\
               ROOM-101,bathroom,0,0.35,9,150,600,1400\n\
               RAMP-202,outdoor_ramp,0.05,0.70,12,350,300,1800\n";

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/audits/batch")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(csv))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["non_compliant"], 1);
    let reports = body["reports"].as_array().expect("report array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["overall"], "fail");
    assert_eq!(reports[1]["overall"], "pass");
}

#[tokio::test]
async fn batch_endpoint_reports_bad_rows() {
    let csv = "space_id,zone,slope_ratio,dcof,r_value,lux,adjacent_lux,turning_diameter_mm\n\
               ROOM-101,bathroom,0,-0.35,9,150,600,1400\n";

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/audits/batch")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(csv))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().expect("error").contains("row 2"));
}
