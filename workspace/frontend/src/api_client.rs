pub mod forecast;
pub mod sellers;

use cropdash_common::{ErrorResponse, FetchError};
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// Common GET request handler
///
/// The backend answers with bare JSON documents; non-2xx responses may carry an
/// `{"error": ...}` body whose message is surfaced when present. Failures are
/// only traced here; the dashboard loaders report them.
pub async fn get<T>(endpoint: &str, query: &[(&str, String)]) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {} {:?}", url, query);

    let response = Request::get(&url)
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(|e| {
            let err = FetchError::Network(e.to_string());
            log::debug!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        log::debug!("GET {} - Non-OK response: {}", endpoint, response.status());
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        let err = FetchError::Http { status, message };
        log::debug!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let err = FetchError::Decode(e.to_string());
        log::debug!("GET {} - {}", endpoint, err);
        err
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
