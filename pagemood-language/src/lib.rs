//! Google Cloud Natural Language integration for Pagemood.
//!
//! This crate exposes the [`traits::TextAnalyzer`] interface, the concrete
//! [`client::GoogleLanguageClient`] implementation, and the two
//! derived-output helpers the pipeline needs: the Wikipedia link collector
//! (`wiki`) and the sentiment emoji mapper (`emoji`).
//!
//! # Examples
//! ```no_run
//! use pagemood_common::Result;
//! use pagemood_language::credentials::ApiCredentials;
//! use pagemood_language::client::GoogleLanguageClient;
//! use pagemood_language::traits::TextAnalyzer;
//! use pagemood_language::types::DocumentType;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let creds = ApiCredentials::from_key_file("key.json".as_ref())?;
//! let client = GoogleLanguageClient::new(creds, "en")?;
//! let entities = client.analyze_entities("California is a state.", DocumentType::PlainText).await?;
//! assert!(!entities.entities.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod emoji;
pub mod traits;
pub mod types;
pub mod wiki;

/// Production endpoint of the Natural Language v1 REST API.
pub const LANGUAGE_API_BASE: &str = "https://language.googleapis.com/v1/";
