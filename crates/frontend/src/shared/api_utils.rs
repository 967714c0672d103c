//! API utilities for console-backend communication
//!
//! Every call returns `Result<T, ActionError>`: transport failures map to
//! `Network`, non-2xx responses to `Server` and body mismatches to `Decode`.

use contracts::domain::common::ActionError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// `ADMIN_API_BASE` set at build time wins; otherwise the API is expected
/// under `/api` on the page origin.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/orders/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/api", origin)
}

/// Build a full API URL from a path starting with `/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a query built with `serde_qs`; nothing is appended for an empty query
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

fn network_error(context: &str, e: gloo_net::Error) -> ActionError {
    log::error!("{}: {}", context, e);
    ActionError::Network(e.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, ActionError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ActionError::from_response(status, &body);
    log::warn!("{} {} -> {}", response.url(), status, err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ActionError> {
    let text = response
        .text()
        .await
        .map_err(|e| ActionError::Decode(format!("failed to read response: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("unexpected payload from {}: {}", response.url(), e);
        ActionError::Decode(e.to_string())
    })
}

/// `GET {api_base}{path}` decoded into `T`
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ActionError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| network_error(&format!("GET {}", url), e))?;
    decode(ensure_success(response).await?).await
}

/// `PUT {api_base}{path}` with a JSON body; any 2xx counts as success
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ActionError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| network_error(&format!("PUT {}", url), e))?
        .send()
        .await
        .map_err(|e| network_error(&format!("PUT {}", url), e))?;
    ensure_success(response).await.map(|_| ())
}

/// `PUT {api_base}{path}` without a body
pub async fn put_empty(path: &str) -> Result<(), ActionError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| network_error(&format!("PUT {}", url), e))?;
    ensure_success(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::OrderStatus;
    use contracts::domain::common::ListQuery;

    #[test]
    fn test_with_query() {
        let q = ListQuery::new(Some(OrderStatus::Delivered), 2);
        assert_eq!(with_query("/orders", &q), "/orders?status=delivered&page=2");

        let q: ListQuery<OrderStatus> = ListQuery::new(None, 1);
        assert_eq!(with_query("/orders", &q), "/orders?page=1");
    }
}
