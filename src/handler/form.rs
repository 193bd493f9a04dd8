//! Form submission endpoint
//!
//! Decodes `POST /submit` bodies (URL-encoded or JSON), writes the decoded
//! field map to the log, and answers with a fixed acknowledgment. Nothing
//! is validated or persisted.

use crate::config::Config;
use crate::http;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

/// Literal acknowledgment sent for every accepted submission
pub const SUBMISSION_ACK: &str = "Form submission successful!";

/// Handle a form submission request
pub async fn handle_submission<B>(req: Request<B>, config: &Config) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return http::build_400_response();
        }
    };

    // Content-Length is checked before dispatch; this guards chunked bodies
    if body.len() as u64 > config.http.max_body_size {
        logger::log_error(&format!(
            "Request body too large: {} bytes (max: {})",
            body.len(),
            config.http.max_body_size
        ));
        return http::build_413_response();
    }

    match decode_body(&body, content_type.as_deref()) {
        Ok(fields) => {
            logger::log_form_submission(&fields);
            if config.logging.access_log {
                logger::log_response(200, SUBMISSION_ACK.len());
            }
            http::build_text_response(SUBMISSION_ACK)
        }
        Err(e) => {
            logger::log_warning(&format!("Malformed submission body: {e}"));
            http::build_400_response()
        }
    }
}

/// Decode a submission body into field/value pairs
///
/// `application/json` bodies are parsed with serde; everything else,
/// including a missing Content-Type, is treated as URL-encoded. An empty
/// body decodes to an empty field list.
pub fn decode_body(
    body: &[u8],
    content_type: Option<&str>,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    if content_type.is_some_and(|ct| ct.trim_start().starts_with("application/json")) {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        return Ok(json_fields(&value));
    }

    Ok(url::form_urlencoded::parse(body).into_owned().collect())
}

/// Flatten a JSON body into loggable pairs
///
/// Objects map field-by-field; any other shape is logged under a single
/// `body` entry.
fn json_fields(value: &serde_json::Value) -> Vec<(String, String)> {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(name, v)| (name.clone(), render_value(v)))
            .collect(),
        other => vec![("body".to_string(), render_value(other))],
    }
}

/// Render a JSON value for the log, strings without surrounding quotes
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
