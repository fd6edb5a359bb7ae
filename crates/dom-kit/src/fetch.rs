//! JSON fetch helper.
//!
//! A single GET with a parsed-JSON callback: fire and forget, no retry,
//! timeout, or cancellation. Failures go to the tracing sink.

use serde_json::Value;
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// GET `url` and parse the response body as JSON.
pub fn fetch_json_blocking(url: &str) -> Result<Value, FetchError> {
    let data = reqwest::blocking::get(url)?.error_for_status()?.json()?;
    Ok(data)
}

/// Fire-and-forget fetch: GET on a background thread, hand the parsed JSON
/// to `on_update`. Failures are logged, not returned.
///
/// The returned handle can be joined when completion matters (tests,
/// shutdown); dropping it detaches the request.
pub fn fetch_json<F>(url: &str, on_update: F) -> JoinHandle<()>
where
    F: FnOnce(Value) + Send + 'static,
{
    let url = url.to_owned();
    thread::spawn(move || match fetch_json_blocking(&url) {
        Ok(data) => on_update(data),
        Err(err) => tracing::error!(%err, url, "fetch failed"),
    })
}
