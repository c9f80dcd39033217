//! Wire types for the Natural Language v1 REST API.
//!
//! Field names follow the REST JSON schema (camelCase, `type` tags as
//! SCREAMING_SNAKE_CASE strings). Entity metadata is an [`IndexMap`] so the
//! response order of the key/value pairs survives deserialization — the
//! wiki-link collector walks it in that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    TypeUnspecified,
    #[default]
    PlainText,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncodingType {
    None,
    Utf8,
    Utf16,
    Utf32,
}

/// The document payload shared by both analyze operations.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub document: Document,
    pub encoding_type: EncodingType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    #[default]
    Unknown,
    Person,
    Location,
    Organization,
    Event,
    WorkOfArt,
    ConsumerGood,
    Other,
    PhoneNumber,
    Address,
    Date,
    Number,
    Price,
}

impl EntityType {
    /// The API's name for the variant, as printed in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Unknown => "UNKNOWN",
            EntityType::Person => "PERSON",
            EntityType::Location => "LOCATION",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Event => "EVENT",
            EntityType::WorkOfArt => "WORK_OF_ART",
            EntityType::ConsumerGood => "CONSUMER_GOOD",
            EntityType::Other => "OTHER",
            EntityType::PhoneNumber => "PHONE_NUMBER",
            EntityType::Address => "ADDRESS",
            EntityType::Date => "DATE",
            EntityType::Number => "NUMBER",
            EntityType::Price => "PRICE",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentionType {
    #[default]
    TypeUnknown,
    Proper,
    Common,
}

impl MentionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionType::TypeUnknown => "TYPE_UNKNOWN",
            MentionType::Proper => "PROPER",
            MentionType::Common => "COMMON",
        }
    }
}

impl fmt::Display for MentionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of source text returned with mentions and sentences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub begin_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMention {
    pub text: TextSpan,
    #[serde(rename = "type", default)]
    pub mention_type: MentionType,
}

/// One recognized entity with its salience and service-provided metadata.
///
/// For many well-known entities the metadata carries a Wikipedia URL under
/// the `wikipedia_url` key and a Knowledge Graph MID under `mid`; other
/// entity types add their own keys (addresses carry `street_name`,
/// `postal_code`, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type", default)]
    pub entity_type: EntityType,
    #[serde(default)]
    pub salience: f32,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    #[serde(default)]
    pub mentions: Vec<EntityMention>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Detected (or request-hinted) language of the text.
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Polarity in [-1, 1].
    #[serde(default)]
    pub score: f32,
    /// Non-negative strength, independent of polarity.
    #[serde(default)]
    pub magnitude: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub text: TextSpan,
    #[serde(default)]
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentResponse {
    #[serde(default)]
    pub document_sentiment: Sentiment,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_rest_schema() {
        let req = AnalyzeRequest {
            document: Document {
                doc_type: DocumentType::PlainText,
                language: "en".into(),
                content: "California is a state.".into(),
            },
            encoding_type: EncodingType::Utf8,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["document"]["language"], "en");
        assert_eq!(json["encodingType"], "UTF8");
    }

    #[test]
    fn entity_metadata_preserves_response_order() {
        let raw = r#"{
            "name": "California",
            "type": "LOCATION",
            "salience": 0.9,
            "metadata": {
                "mid": "/m/01n7q",
                "wikipedia_url": "https://en.wikipedia.org/wiki/California"
            },
            "mentions": [{"text": {"content": "California", "beginOffset": 0}, "type": "PROPER"}]
        }"#;
        let entity: Entity = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = entity.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mid", "wikipedia_url"]);
        assert_eq!(entity.entity_type, EntityType::Location);
        assert_eq!(entity.mentions[0].mention_type, MentionType::Proper);
    }

    #[test]
    fn missing_optional_fields_default() {
        let entity: Entity = serde_json::from_str(r#"{"name": "thing"}"#).unwrap();
        assert_eq!(entity.entity_type, EntityType::Unknown);
        assert!(entity.metadata.is_empty());
        assert!(entity.mentions.is_empty());
        assert_eq!(entity.salience, 0.0);
    }
}
