use async_trait::async_trait;
use pagemood_common::Result;

use crate::types::{AnalyzeEntitiesResponse, AnalyzeSentimentResponse, DocumentType};

/// The analysis boundary the pipeline talks to.
///
/// Production uses [`crate::client::GoogleLanguageClient`]; tests substitute
/// fakes with canned responses so the pipeline runs without network access.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Recognize entities (people, places, organizations, ...) in the text.
    async fn analyze_entities(
        &self,
        text: &str,
        doc_type: DocumentType,
    ) -> Result<AnalyzeEntitiesResponse>;

    /// Score document and per-sentence sentiment for the text.
    async fn analyze_sentiment(
        &self,
        text: &str,
        doc_type: DocumentType,
    ) -> Result<AnalyzeSentimentResponse>;
}
