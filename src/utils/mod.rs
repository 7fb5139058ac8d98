//! Utility modules
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup and log-line helpers

pub mod error;
pub mod logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
