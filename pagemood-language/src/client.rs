//! REST client for the Natural Language v1 API.

use async_trait::async_trait;
use pagemood_common::{PagemoodError, Result};
use pagemood_http::{Auth, HttpClient, RequestOpts};
use serde::de::DeserializeOwned;

use crate::credentials::ApiCredentials;
use crate::traits::TextAnalyzer;
use crate::types::{
    AnalyzeEntitiesResponse, AnalyzeRequest, AnalyzeSentimentResponse, Document, DocumentType,
    EncodingType,
};
use crate::LANGUAGE_API_BASE;

// The leading `./` keeps the colon in the method name from being read as a
// URL scheme when the path is resolved against the base.
const ANALYZE_ENTITIES_PATH: &str = "./documents:analyzeEntities";
const ANALYZE_SENTIMENT_PATH: &str = "./documents:analyzeSentiment";

/// Google Cloud Natural Language API client.
///
/// Credentials are loaded before construction, so a bad key file fails the
/// run without any network traffic. The client itself is constructed once
/// and reused for both analyze operations.
pub struct GoogleLanguageClient {
    http: HttpClient,
    credentials: ApiCredentials,
    language: String,
}

impl GoogleLanguageClient {
    /// Create a client against the production endpoint.
    pub fn new(credentials: ApiCredentials, language: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(credentials, language, LANGUAGE_API_BASE)
    }

    /// Create a client against a custom endpoint (tests use a mock server).
    pub fn with_endpoint(
        credentials: ApiCredentials,
        language: impl Into<String>,
        endpoint: &str,
    ) -> Result<Self> {
        let http = HttpClient::new(endpoint)
            .map_err(|e| PagemoodError::Config(format!("bad language endpoint: {e}")))?;
        Ok(Self {
            http,
            credentials,
            language: language.into(),
        })
    }

    async fn analyze<T>(&self, path: &str, text: &str, doc_type: DocumentType) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = AnalyzeRequest {
            document: Document {
                doc_type,
                language: self.language.clone(),
                content: text.to_string(),
            },
            encoding_type: EncodingType::Utf8,
        };

        tracing::debug!(
            operation = path.trim_start_matches("./"),
            text_len = text.len(),
            doc_type = ?doc_type,
            "language.request"
        );

        let opts = RequestOpts {
            auth: Auth::Query {
                name: "key",
                value: self.credentials.key().into(),
            },
            ..Default::default()
        };

        self.http
            .post_json(path, &request, opts)
            .await
            .map_err(|e| match &e {
                pagemood_http::HttpError::Api { status, message } => match status.as_u16() {
                    429 => PagemoodError::Analysis("rate limit exceeded".into()),
                    401 | 403 => PagemoodError::Analysis(format!(
                        "request rejected, check the API key: {message}"
                    )),
                    _ => PagemoodError::Analysis(format!(
                        "language API error ({status}): {message}"
                    )),
                },
                _ => PagemoodError::Analysis(e.to_string()),
            })
    }
}

#[async_trait]
impl TextAnalyzer for GoogleLanguageClient {
    async fn analyze_entities(
        &self,
        text: &str,
        doc_type: DocumentType,
    ) -> Result<AnalyzeEntitiesResponse> {
        let response: AnalyzeEntitiesResponse =
            self.analyze(ANALYZE_ENTITIES_PATH, text, doc_type).await?;
        tracing::info!(
            entity_count = response.entities.len(),
            language = %response.language,
            "language.entities.done"
        );
        Ok(response)
    }

    async fn analyze_sentiment(
        &self,
        text: &str,
        doc_type: DocumentType,
    ) -> Result<AnalyzeSentimentResponse> {
        let response: AnalyzeSentimentResponse =
            self.analyze(ANALYZE_SENTIMENT_PATH, text, doc_type).await?;
        tracing::info!(
            score = response.document_sentiment.score,
            magnitude = response.document_sentiment.magnitude,
            sentence_count = response.sentences.len(),
            language = %response.language,
            "language.sentiment.done"
        );
        Ok(response)
    }
}
