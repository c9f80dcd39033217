//! Page acquisition and tag extraction.
//!
//! - Single-shot page fetcher over `pagemood-http` (`fetch`)
//! - Allow-list tag text extraction over a parsed DOM (`extract`)
//!
//! Extraction is deliberately permissive: broken markup never fails, the
//! parser recovers what it can and the extractor works with the result.

pub mod extract;
pub mod fetch;

pub use extract::{extract_important_text, IMPORTANT_TAGS};
pub use fetch::PageFetcher;
