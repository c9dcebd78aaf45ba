//! REST Backend Bindings
//!
//! Thin async wrappers over the backend's HTTP endpoints, organized by
//! resource. Every call returns `Result<_, ApiError>`; callers log failures.

mod member;
mod todo;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_server;

use reqwest::{Client, Response, StatusCode};

use crate::error::ApiError;

pub use member::*;
pub use todo::*;

thread_local! {
    static HTTP: Client = Client::new();
}

/// Shared HTTP client for the UI thread
fn http() -> Client {
    HTTP.with(Client::clone)
}

fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Reject non-2xx responses before reading the body
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    check_status(response.status())?;
    Ok(response)
}
