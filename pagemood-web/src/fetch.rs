//! Single-shot page fetcher.

use pagemood_common::{PagemoodError, Result};
use pagemood_http::{HttpClient, RequestOpts};

/// Fetches one page body over HTTP.
///
/// The fetcher is anchored to a single URL at construction; every failure —
/// invalid URL, transport error, non-2xx status — surfaces as
/// [`PagemoodError::Fetch`] and aborts the pipeline before analysis runs.
pub struct PageFetcher {
    http: HttpClient,
    url: String,
}

impl PageFetcher {
    pub fn new(url: &str) -> Result<Self> {
        let http = HttpClient::new(url)
            .map_err(|e| PagemoodError::Fetch(format!("invalid page URL {url}: {e}")))?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    /// Issue the GET and return the raw HTML body.
    pub async fn fetch(&self) -> Result<String> {
        tracing::info!(url = %self.url, "page.fetch.start");

        let body = self
            .http
            .get_text(&self.url, RequestOpts::default())
            .await
            .map_err(|e| PagemoodError::Fetch(format!("GET {} failed: {e}", self.url)))?;

        tracing::info!(url = %self.url, body_len = body.len(), "page.fetch.done");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>hello</h1>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(&server.uri()).expect("fetcher");
        let body = fetcher.fetch().await.expect("body");
        assert_eq!(body, "<h1>hello</h1>");
    }

    #[tokio::test]
    async fn non_2xx_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(&server.uri()).expect("fetcher");
        let err = fetcher.fetch().await.expect_err("should fail");
        assert!(matches!(err, PagemoodError::Fetch(_)), "got {err:?}");
    }

    #[test]
    fn invalid_url_is_rejected_up_front() {
        assert!(PageFetcher::new("not a url").is_err());
    }
}
