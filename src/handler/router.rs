//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation and dispatch
//! to the static file responder or the form submission handler.

use crate::config::Config;
use crate::handler::{form, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Path of the form submission endpoint
pub const SUBMIT_PATH: &str = "/submit";

/// Request context for static file serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body so tests can drive it with in-memory
/// bodies; the server feeds it `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = config.logging.access_log;
    if access_log {
        logger::log_request(&method, req.uri());
    }

    let response = match (&method, path.as_str()) {
        (&Method::POST, SUBMIT_PATH) => {
            // Reject oversized bodies from the declared length before reading
            if let Some(resp) = check_body_size(&req, config.http.max_body_size) {
                resp
            } else {
                form::handle_submission(req, &config).await
            }
        }
        (&Method::POST, _) => {
            if access_log {
                logger::log_response(404, 0);
            }
            http::build_404_response()
        }
        (&Method::GET | &Method::HEAD, _) => {
            let ctx = RequestContext {
                path: &path,
                is_head: method == Method::HEAD,
                if_none_match: req
                    .headers()
                    .get("if-none-match")
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string),
                access_log,
            };
            static_files::serve(&ctx, &config).await
        }
        (&Method::OPTIONS, _) => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    Ok(response)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
