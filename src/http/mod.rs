//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the handlers: response builders,
//! MIME inference, and conditional request validation.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_cached_response, build_options_response, build_text_response,
};
