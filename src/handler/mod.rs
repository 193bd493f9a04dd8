//! Request handler module
//!
//! Routing dispatch plus the two request handlers: static file serving and
//! the form submission endpoint.

pub mod form;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use form::SUBMISSION_ACK;
pub use router::handle_request;
