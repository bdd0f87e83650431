//! DTO for the client IP echo endpoint.

use serde::Serialize;

/// The client IP as the server sees it.
///
/// The storefront calls this before tracking an action so the recorded IP
/// matches what the server would derive anyway.
#[derive(Debug, Serialize)]
pub struct IpResponse {
    pub ip: String,
}
