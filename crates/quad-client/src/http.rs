//! Response decoding for the search backend.
//!
//! Centralizes status-code handling and envelope validation so the client
//! module stays focused on request construction. The backend's error bodies
//! are `{"error": ..., "detail": ...}`, both optional; success bodies are
//! either a bare row array or `{"results": [...]}`.

use serde_json::Value;

use quad_core::CourseRow;

use crate::error::SearchError;

/// Decode a `/search` response into rows.
///
/// Non-success statuses become [`SearchError::Backend`] with a message
/// built by [`failure_message`]. Success bodies that are not a row array
/// (bare or under `results`) become [`SearchError::UnexpectedFormat`].
pub(crate) async fn read_rows(resp: reqwest::Response) -> Result<Vec<CourseRow>, SearchError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(SearchError::Backend {
            status: status.as_u16(),
            message: failure_message(status.as_u16(), &body),
        });
    }

    let payload: Value =
        serde_json::from_str(&body).map_err(|_| SearchError::UnexpectedFormat)?;
    rows_from_payload(payload)
}

/// Check a response where only the status matters (e.g. `/healthz`).
pub(crate) async fn check_status(resp: reqwest::Response) -> Result<(), SearchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(SearchError::Backend {
        status: status.as_u16(),
        message: failure_message(status.as_u16(), &body),
    })
}

/// Build the display message for a failed request.
///
/// Uses the payload's `error` field when the body parses as JSON and the
/// field is a string, otherwise a generic message naming the status code.
/// A string `detail` field is appended as `": {detail}"` either way.
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    let payload: Option<Value> = serde_json::from_str(body).ok();
    let payload = payload.as_ref();

    let mut message = payload
        .and_then(|p| p.get("error"))
        .and_then(Value::as_str)
        .map_or_else(
            || format!("search request failed with status {status}"),
            ToOwned::to_owned,
        );
    if let Some(detail) = payload.and_then(|p| p.get("detail")).and_then(Value::as_str) {
        message.push_str(": ");
        message.push_str(detail);
    }
    message
}

/// Extract rows from a success payload.
///
/// A bare array is returned as-is; an object is unwrapped through its
/// `results` array. Everything else is an unexpected format.
pub(crate) fn rows_from_payload(payload: Value) -> Result<Vec<CourseRow>, SearchError> {
    match payload {
        Value::Array(rows) => Ok(rows.into_iter().map(CourseRow).collect()),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(rows)) => Ok(rows.into_iter().map(CourseRow).collect()),
            _ => Err(SearchError::UnexpectedFormat),
        },
        _ => Err(SearchError::UnexpectedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn failure_message_error_and_detail() {
        let body = r#"{"error":"bad input","detail":"school required"}"#;
        assert_eq!(failure_message(400, body), "bad input: school required");
    }

    #[test]
    fn failure_message_error_only() {
        assert_eq!(failure_message(400, r#"{"error":"bad input"}"#), "bad input");
    }

    #[test]
    fn failure_message_detail_only_appends_to_generic() {
        assert_eq!(
            failure_message(500, r#"{"detail":"pool exhausted"}"#),
            "search request failed with status 500: pool exhausted"
        );
    }

    #[rstest]
    #[case("")]
    #[case("<html>Bad Gateway</html>")]
    #[case(r#"{"error": 42}"#)]
    fn failure_message_falls_back_to_status(#[case] body: &str) {
        assert_eq!(failure_message(502, body), "search request failed with status 502");
    }

    #[test]
    fn rows_from_bare_array_is_identity() {
        let payload = json!([["CS", "225", "DS", "desc", 4], ["CS", "374", "Algos", "d", 3]]);
        let rows = rows_from_payload(payload.clone()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(serde_json::to_value(&rows).unwrap(), payload);
    }

    #[test]
    fn rows_from_results_wrapper() {
        let rows = rows_from_payload(json!({"results": [["CS", "225"]]})).unwrap();
        assert_eq!(rows, vec![CourseRow(json!(["CS", "225"]))]);
    }

    #[rstest]
    #[case(json!({"foo": 1}))]
    #[case(json!({"results": "not-a-list"}))]
    #[case(json!("just a string"))]
    #[case(json!(42))]
    fn rows_from_other_shapes_fail(#[case] payload: Value) {
        let err = rows_from_payload(payload).unwrap_err();
        assert!(matches!(err, SearchError::UnexpectedFormat));
        assert_eq!(err.to_string(), "unexpected response format");
    }

    #[tokio::test]
    async fn read_rows_success_array() {
        let resp = mock_response(200, r#"[["CS","225","DS","desc",4]]"#);
        let rows = read_rows(resp).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn read_rows_success_wrapped() {
        let resp = mock_response(200, r#"{"results":[["CS","225"]]}"#);
        let rows = read_rows(resp).await.unwrap();
        assert_eq!(rows, vec![CourseRow(json!(["CS", "225"]))]);
    }

    #[tokio::test]
    async fn read_rows_backend_error_message() {
        let resp = mock_response(400, r#"{"error":"bad input","detail":"school required"}"#);
        let err = read_rows(resp).await.unwrap_err();
        assert!(matches!(err, SearchError::Backend { status: 400, .. }));
        assert_eq!(err.to_string(), "bad input: school required");
    }

    #[tokio::test]
    async fn read_rows_non_json_success_body() {
        let resp = mock_response(200, "not json");
        let err = read_rows(resp).await.unwrap_err();
        assert!(matches!(err, SearchError::UnexpectedFormat));
    }

    #[tokio::test]
    async fn check_status_ok_on_2xx() {
        assert!(check_status(mock_response(200, r#"{"status":"ok"}"#)).await.is_ok());
        assert!(check_status(mock_response(204, "")).await.is_ok());
    }

    #[tokio::test]
    async fn check_status_shapes_failures() {
        let err = check_status(mock_response(503, r#"{"error":"not ready"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Backend { status: 503, .. }));
        assert_eq!(err.to_string(), "not ready");
    }
}
