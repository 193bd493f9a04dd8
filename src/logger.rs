// Logging module
// Plain line-oriented logging: access lines to stdout, warnings/errors to stderr

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("formserve started successfully");
    println!("Listening on: http://{addr} (port {})", addr.port());
    println!("Log level: {}", config.logging.level);
    println!("Public directory: {}", config.static_files.dir);
    println!("Index file: {}", config.static_files.index);
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[{}] [ERROR] Failed to serve connection: {err:?}", timestamp());
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[{}] [Request] {method} {uri}", timestamp());
}

pub fn log_response(status: u16, size: usize) {
    println!("[{}] [Response] {status} ({size} bytes)", timestamp());
}

/// Log a decoded form submission, one line per request
pub fn log_form_submission(fields: &[(String, String)]) {
    println!("[{}] [Form] Data received: {}", timestamp(), format_fields(fields));
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

/// Render decoded fields as `{ name: 'Alice', email: 'a@example.com' }`
pub(crate) fn format_fields(fields: &[(String, String)]) -> String {
    if fields.is_empty() {
        return "{} (empty body)".to_string();
    }

    let rendered: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("{name}: '{value}'"))
        .collect();

    format!("{{ {} }}", rendered.join(", "))
}
