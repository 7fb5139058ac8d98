//! Error handling for the service
//!
//! This module defines the crate-wide error type and its HTTP mapping.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use helpers::codes;
pub use response::ErrorResponse;
pub use types::{BeatFlowError, Result};
