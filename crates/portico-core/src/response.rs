//! Response construction.
//!
//! Every response leaving the pipeline goes through [`respond`], which
//! sets the Content-Type header to `"<mime>; charset=utf-8"` and the
//! given status. Structured error responses are always JSON-encoded,
//! whatever MIME the operation itself is configured with.

use bytes::Bytes;
use http::{header, Response, StatusCode};

use crate::{HttpError, MimeType};

/// Builds a response with body, MIME type and status code.
///
/// # Panics
///
/// Panics if response construction fails, which cannot happen with the
/// fixed header set used here.
#[must_use]
pub fn respond(body: &str, mime: MimeType, status: StatusCode) -> Response<Bytes> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, format!("{mime}; charset=utf-8"))
        .body(Bytes::from(body.to_owned()))
        .expect("Failed to build response")
}

/// Builds the JSON response for a structured error.
///
/// Always `application/json` with the error's own status code; the
/// operation's configured serializer and MIME type are bypassed.
#[must_use]
pub fn respond_error(error: HttpError) -> Response<Bytes> {
    respond(
        &error.envelope().to_string(),
        MimeType::Json,
        error.status_code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_sets_content_type_with_charset() {
        let response = respond("hello", MimeType::Text, StatusCode::OK);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.body(), &Bytes::from("hello"));
    }

    #[test]
    fn test_respond_error_is_json_envelope() {
        let response = respond_error(HttpError::Format);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );

        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, serde_json::json!({"code": 400, "status": "Format Error"}));
    }

    #[test]
    fn test_respond_error_uses_own_status() {
        for error in HttpError::ALL {
            let response = respond_error(error);
            assert_eq!(response.status().as_u16(), error.code());
        }
    }
}
