//! formserve - a small HTTP server that serves a static form page and
//! accepts form submissions on `POST /submit`.
//!
//! Submitted data is decoded (URL-encoded or JSON), written to the log,
//! and discarded; the client always receives a fixed acknowledgment.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
