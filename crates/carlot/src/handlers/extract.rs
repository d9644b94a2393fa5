//! Lenient JSON body extraction.
//!
//! Create and update payloads are passed to the store without validation.
//! A request with no JSON content type or an empty body yields the
//! payload's defaults (every field NULL). Only a body that claims to be
//! JSON and fails to parse is rejected.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Extractor for request payloads that never rejects on field shape.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_payload(is_json, &body).map(LenientJson).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed JSON body");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("JSON inválido: {e}") })),
            )
                .into_response()
        })
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

/// Decode a payload from a request body.
///
/// Non-JSON and empty bodies produce `T::default()`. A JSON value that is
/// not an object (e.g. an array) also produces the defaults.
fn parse_payload<T>(is_json: bool, body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use carlot_core::catalog::{CarFields, UserFields};

    #[test]
    fn test_non_json_content_type_yields_defaults() {
        let fields: UserFields = parse_payload(false, br#"{"name": "Alice"}"#).unwrap();

        assert_eq!(fields, UserFields::default());
    }

    #[test]
    fn test_empty_body_yields_defaults() {
        let fields: UserFields = parse_payload(true, b"  ").unwrap();

        assert_eq!(fields, UserFields::default());
    }

    #[test]
    fn test_wrong_field_types_are_coerced() {
        let fields: UserFields = parse_payload(true, br#"{"name": 123, "email": "x"}"#).unwrap();

        assert_eq!(fields.name.as_deref(), Some("123"));
        assert_eq!(fields.email.as_deref(), Some("x"));
    }

    #[test]
    fn test_non_object_json_yields_defaults() {
        let fields: CarFields = parse_payload(true, b"[1, 2, 3]").unwrap();

        assert_eq!(fields, CarFields::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<UserFields, _> = parse_payload(true, b"{\"name\": ");

        assert!(result.is_err());
    }

    #[test]
    fn test_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!has_json_content_type(&headers));
    }
}
