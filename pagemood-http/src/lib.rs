//! Minimal HTTP client with safe logging and flexible auth.
//!
//! - `get_text` for page bodies, `post_json` for JSON APIs
//! - Redacts sensitive query params and never logs secret values
//! - No retries: the pipeline is single-shot and a failed request is final
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), pagemood_http::HttpError> {
//! let client = pagemood_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .post_json("v1/items", &serde_json::json!({}), pagemood_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! Security: auth values travel as query parameters or headers but logs only
//! ever include the auth kind (query/header/none), not the secret.

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

// ==============================
// Auth & Request Options
// ==============================

/// Authentication strategies supported by the HTTP client helpers.
#[derive(Clone, Debug, Default)]
pub enum Auth<'a> {
    /// Auth via query param (e.g. Google APIs: `?key=...`)
    Query { name: &'a str, value: Cow<'a, str> },
    #[default]
    None,
}

/// Per-request tuning knobs for the HTTP client.
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub auth: Auth<'a>,
    pub query: Option<Vec<(&'a str, Cow<'a, str>)>>,
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use pagemood_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// GET a text body (HTML pages and the like). Non-2xx is an [`HttpError::Api`].
    pub async fn get_text(&self, path: &str, opts: RequestOpts<'_>) -> Result<String, HttpError> {
        let (status, bytes) = self.send(Method::GET, path, None::<&()>, opts).await?;
        if !status.is_success() {
            return Err(HttpError::Api {
                status,
                message: snip_body(&bytes),
            });
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOpts<'_>,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, bytes) = self.send(Method::POST, path, Some(body), opts).await?;
        let snippet = snip_body(&bytes);

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            tracing::warn!(%status, message=%message, body_snippet=%snippet, "http.error");
            return Err(HttpError::Api { status, message });
        }

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(
                serde_line=%e.line(),
                serde_col=%e.column(),
                serde_err=%e.to_string(),
                body_snippet=%snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }

    // ==============================
    // Core request implementation
    // ==============================

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        mut opts: RequestOpts<'_>,
    ) -> Result<(StatusCode, Vec<u8>), HttpError>
    where
        B: Serialize + ?Sized,
    {
        // Absolute paths are accepted so the page fetcher can hit arbitrary URLs.
        let url = match Url::parse(path) {
            Ok(abs) => abs,
            Err(_) => self
                .base
                .join(path)
                .map_err(|e| HttpError::Url(e.to_string()))?,
        };

        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let mut rb = self.inner.request(method.clone(), url.clone()).timeout(timeout);

        if let Auth::Query { name, value } = &opts.auth {
            let mut q = opts.query.take().unwrap_or_default();
            q.push((*name, value.clone()));
            opts.query = Some(q);
        }
        if let Some(q) = &opts.query {
            let pairs: Vec<(&str, &str)> = q.iter().map(|(k, v)| (*k, v.as_ref())).collect();
            rb = rb.query(&pairs);
        }
        if let Some(b) = body {
            rb = rb.json(b);
        }

        let auth_kind = match &opts.auth {
            Auth::Query { .. } => "query",
            Auth::None => "none",
        };
        tracing::debug!(
            method=%method,
            host_path=%format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            query=?redact_query_pairs(opts.query.as_deref()),
            timeout_ms=timeout.as_millis() as u64,
            auth_kind,
            has_body=%body.is_some(),
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb.send().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(message=%message, "http.network_error.send");
            HttpError::Network(message)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp
            .bytes()
            .await
            .map_err(|err| {
                let message = err.to_string();
                tracing::warn!(message=%message, "http.network_error.body");
                HttpError::Network(message)
            })?
            .to_vec();

        tracing::debug!(
            %status,
            duration_ms=t0.elapsed().as_millis() as u64,
            body_len=bytes.len(),
            content_type=?headers
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            "http.response"
        );

        Ok((status, bytes))
    }
}

// ==============================
// Helpers
// ==============================

fn redact_query_pairs(query: Option<&[(&str, Cow<'_, str>)]>) -> Vec<(String, String)> {
    query
        .map(|q| {
            q.iter()
                .map(|(k, v)| {
                    let is_secret = matches!(
                        k.to_ascii_lowercase().as_str(),
                        "access_token"
                            | "authorization"
                            | "auth"
                            | "key"
                            | "api_key"
                            | "token"
                            | "secret"
                            | "client_secret"
                            | "bearer"
                    );
                    (
                        (*k).to_string(),
                        if is_secret {
                            "<redacted>".to_string()
                        } else {
                            v.as_ref().to_string()
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn extract_error_message(body: &[u8]) -> String {
    // Google style: {"error":{"message":"...","status":"..."}}
    #[derive(Deserialize)]
    struct GoogleEnv {
        error: GoogleDetail,
    }
    #[derive(Deserialize)]
    struct GoogleDetail {
        #[serde(default)]
        message: String,
        #[serde(default)]
        status: String,
    }

    // Generic: {"message":"..."} or {"error":"..."}
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(env) = serde_json::from_slice::<GoogleEnv>(body) {
        if !env.error.message.is_empty() {
            return env.error.message;
        }
        if !env.error.status.is_empty() {
            return env.error.status;
        }
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}
