//! Integration tests driving the router with in-memory requests

use formserve::config::{Config, HttpConfig, LoggingConfig, ServerConfig, StaticConfig};
use formserve::handler::{self, SUBMISSION_ACK};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::path::PathBuf;
use std::sync::Arc;

fn test_config(public_dir: &str) -> Arc<Config> {
    Arc::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        static_files: StaticConfig {
            dir: public_dir.to_string(),
            index: "index.html".to_string(),
        },
        http: HttpConfig {
            max_body_size: 1_048_576,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
        },
    })
}

/// Public directory fixture, removed on drop
struct PublicDir(PathBuf);

impl PublicDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("formserve-router-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        std::fs::write(dir.join("index.html"), b"<html>the form page</html>").expect("write index");
        std::fs::write(dir.join("styles.css"), b"form { margin: 0 }").expect("write css");
        Self(dir)
    }

    fn path(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }
}

impl Drop for PublicDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

async fn send(
    req: Request<Full<Bytes>>,
    config: Arc<Config>,
) -> Response<Full<Bytes>> {
    handler::handle_request(req, config)
        .await
        .expect("handler is infallible")
}

async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
    resp.into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
}

#[tokio::test]
async fn urlencoded_submission_returns_ack() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Full::new(Bytes::from("name=Alice&email=a%40example.com")))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, SUBMISSION_ACK.as_bytes());
}

#[tokio::test]
async fn json_submission_returns_ack() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(r#"{"name":"Alice"}"#)))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, SUBMISSION_ACK.as_bytes());
}

#[tokio::test]
async fn empty_submission_still_acknowledged() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit")
        .body(Full::new(Bytes::new()))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, SUBMISSION_ACK.as_bytes());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from("{not json")))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_declared_body_is_rejected() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit")
        .header("content-length", "10485760")
        .body(Full::new(Bytes::from("name=A")))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn post_to_unknown_path_is_not_found() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/other")
        .body(Full::new(Bytes::from("name=A")))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_serves_index_bytes() {
    let public = PublicDir::new("index");
    let config = test_config(&public.path());
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Full::new(Bytes::new()))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["content-type"],
        "text/html; charset=utf-8"
    );
    assert_eq!(body_bytes(resp).await, &b"<html>the form page</html>"[..]);
}

#[tokio::test]
async fn existing_asset_served_missing_asset_404() {
    let public = PublicDir::new("assets");
    let config = test_config(&public.path());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/styles.css")
        .body(Full::new(Bytes::new()))
        .expect("request builds");
    let resp = send(req, Arc::clone(&config)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, &b"form { margin: 0 }"[..]);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/missing.png")
        .body(Full::new(Bytes::new()))
        .expect("request builds");
    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn head_index_has_empty_body() {
    let public = PublicDir::new("head");
    let config = test_config(&public.path());
    let req = Request::builder()
        .method(Method::HEAD)
        .uri("/")
        .body(Full::new(Bytes::new()))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn conditional_get_answers_304() {
    let public = PublicDir::new("etag");
    let config = test_config(&public.path());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Full::new(Bytes::new()))
        .expect("request builds");
    let resp = send(req, Arc::clone(&config)).await;
    let etag = resp.headers()["etag"].to_str().expect("etag is ascii").to_string();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("if-none-match", &etag)
        .body(Full::new(Bytes::new()))
        .expect("request builds");
    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let config = test_config("unused");
    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/submit")
        .body(Full::new(Bytes::new()))
        .expect("request builds");

    let resp = send(req, config).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
