//! Static file serving module
//!
//! Resolves GET/HEAD paths under the public directory, refuses traversal
//! outside it, serves the configured index file for `/` and directory
//! paths, and builds responses with cache validators.

use crate::config::Config;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a static asset (or the index file) for a GET/HEAD request
pub async fn serve(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    let loaded = load_asset(
        &config.static_files.dir,
        ctx.path,
        &config.static_files.index,
    )
    .await;

    match loaded {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            build_asset_response(
                &content,
                content_type,
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            )
        }
        None => {
            if ctx.access_log {
                logger::log_response(404, 0);
            }
            http::build_404_response()
        }
    }
}

/// Resolve a request path inside the public directory and read the file
///
/// Returns the file bytes and inferred Content-Type, or None for anything
/// that does not resolve to a readable file inside the public root.
pub async fn load_asset(
    public_dir: &str,
    path: &str,
    index_file: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let public_root = match Path::new(public_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Public directory not found or inaccessible '{public_dir}': {e}"
            ));
            return None;
        }
    };

    let file_path = resolve_path(&public_root, path, index_file);

    // Missing files are an ordinary 404, not worth a warning
    let canonical = file_path.canonicalize().ok()?;

    // Canonicalized target must stay inside the public root
    if !canonical.starts_with(&public_root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", canonical.display()));
            return None;
        }
    };

    let content_type = mime::get_content_type(canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Map a request path to a candidate file path under the public root
///
/// `/` and directory paths resolve to the index file.
fn resolve_path(public_root: &Path, path: &str, index_file: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    let mut file_path = public_root.join(relative);

    if relative.is_empty() || path.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(index_file);
    }

    file_path
}

/// Build a 200 response with `ETag`, or 304 when the client copy matches
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag, is_head)
}
