//! Remote data gateway for the orders backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: requests fail with a transport error
//! since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller untouched; there are no retries.
//! URL building, status classification and body parsing are plain functions
//! so they can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::DashboardError;

/// Query parameter naming the backend endpoint on every read.
const ENDPOINT_PARAM: &str = "endpoint";

/// Label used in diagnostics for the single write endpoint.
const WRITE_REQUEST: &str = "POST form";

/// Seam between the controller and the backend.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Gateway {
    /// Validate and store the base address used by every request.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidBaseUrl`] if `base_url` does not parse.
    fn configure(&self, base_url: &str) -> Result<(), DashboardError>;

    /// `GET <base>?endpoint=<endpoint>&<params...>` and parse the JSON body.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error before `configure`, a transport or
    /// status error when the request fails, or a parse error on a non-JSON body.
    async fn read(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, DashboardError>;

    /// `POST <base>` with `fields` as multipart form data.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Gateway::read`].
    async fn write(&self, fields: &[(&str, &str)]) -> Result<Value, DashboardError>;
}

/// Browser `fetch` gateway.
#[derive(Debug, Default)]
pub struct HttpGateway {
    base_url: RefCell<Option<Url>>,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_configured(&self) -> bool {
        self.base_url.borrow().is_some()
    }

    fn base_url(&self) -> Result<Url, DashboardError> {
        self.base_url.borrow().clone().ok_or(DashboardError::Unconfigured)
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    fn configure(&self, base_url: &str) -> Result<(), DashboardError> {
        let url = parse_base_url(base_url)?;
        *self.base_url.borrow_mut() = Some(url);
        Ok(())
    }

    async fn read(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, DashboardError> {
        let url = read_url(&self.base_url()?, endpoint, params);
        let request = read_request(endpoint);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url.as_str())
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| transport_error(&request, e))?;
            check_status(&request, resp.status())?;
            let text = resp.text().await.map_err(|e| transport_error(&request, e))?;
            parse_body(&request, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(transport_error(&request, "not available on server"))
        }
    }

    async fn write(&self, fields: &[(&str, &str)]) -> Result<Value, DashboardError> {
        let url = self.base_url()?;
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|e| transport_error(WRITE_REQUEST, format!("{e:?}")))?;
            for (name, value) in fields {
                form.append_with_str(name, value)
                    .map_err(|e| transport_error(WRITE_REQUEST, format!("{e:?}")))?;
            }
            let resp = gloo_net::http::Request::post(url.as_str())
                .body(form)
                .map_err(|e| transport_error(WRITE_REQUEST, e))?
                .send()
                .await
                .map_err(|e| transport_error(WRITE_REQUEST, e))?;
            check_status(WRITE_REQUEST, resp.status())?;
            let text = resp.text().await.map_err(|e| transport_error(WRITE_REQUEST, e))?;
            parse_body(WRITE_REQUEST, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, fields);
            Err(transport_error(WRITE_REQUEST, "not available on server"))
        }
    }
}

/// Parse a configured base address.
///
/// # Errors
///
/// Returns [`DashboardError::InvalidBaseUrl`] if `raw` is not an absolute URL.
pub fn parse_base_url(raw: &str) -> Result<Url, DashboardError> {
    Url::parse(raw).map_err(|source| DashboardError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    })
}

/// Append `endpoint` and `params`, in order, to the base address query.
pub fn read_url(base: &Url, endpoint: &str, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(ENDPOINT_PARAM, endpoint);
        for (key, value) in params {
            query.append_pair(key, value);
        }
    }
    url
}

fn read_request(endpoint: &str) -> String {
    format!("GET {endpoint}")
}

fn transport_error(request: &str, err: impl std::fmt::Display) -> DashboardError {
    DashboardError::Transport {
        request: request.to_owned(),
        message: err.to_string(),
    }
}

/// Treat any non-2xx status as a failed request.
///
/// # Errors
///
/// Returns [`DashboardError::Status`] for statuses outside `200..300`.
pub fn check_status(request: &str, status: u16) -> Result<(), DashboardError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(DashboardError::Status {
            request: request.to_owned(),
            status,
        })
    }
}

/// Parse a response body as JSON.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] if `text` is not valid JSON.
pub fn parse_body(request: &str, text: &str) -> Result<Value, DashboardError> {
    serde_json::from_str(text).map_err(|e| DashboardError::Parse {
        request: request.to_owned(),
        message: e.to_string(),
    })
}
