//! HTTP middleware implementations
//!
//! CORS, access logging and default headers come from actix; request ID
//! tracking lives here.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware, RequestIdMiddlewareService};
