//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::Value;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON decodes")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let err = Error::internal("database exploded")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let response = ResponseError::error_response(&err);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_details() {
    let err = Error::invalid_request("bad").with_details(json!({"field": "id"}));

    let response = ResponseError::error_response(&err);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_json(response).await;
    assert_eq!(body.get("message").and_then(Value::as_str), Some("bad"));
    assert_eq!(body.pointer("/details/field"), Some(&json!("id")));
}

#[rstest]
#[case(JsonPayloadError::ContentType, "unsupported content type")]
#[case(JsonPayloadError::Overflow { limit: 8 }, "body too large")]
#[case(JsonPayloadError::OverflowKnownLength { length: 64, limit: 8 }, "body too large")]
#[actix_web::test]
async fn json_errors_become_invalid_requests(
    #[case] payload_error: JsonPayloadError,
    #[case] reason: &str,
) {
    let req = TestRequest::post().uri("/sign-in").to_http_request();

    let err = json_error_handler(payload_error, &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(body.pointer("/details/reason"), Some(&json!(reason)));
}
