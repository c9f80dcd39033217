//! The sequential analysis pipeline.
//!
//! Fetch → extract → entity analysis → wiki links → sentiment → emoji, one
//! stage after the other. A failing stage aborts the run before later
//! stages execute; `anyhow` context names the stage for the operator.

use anyhow::{Context, Result};
use pagemood_language::emoji::emoji_for_score;
use pagemood_language::traits::TextAnalyzer;
use pagemood_language::types::{AnalyzeEntitiesResponse, AnalyzeSentimentResponse, DocumentType};
use pagemood_language::wiki::collect_wiki_links;
use pagemood_web::{extract_important_text, PageFetcher};

/// What the run produced, for logging and tests.
#[derive(Debug)]
pub struct PipelineSummary {
    pub wiki_links: Vec<String>,
    pub sentiment_score: f32,
    pub emoji: &'static str,
}

/// Fetch and analyse one page end to end.
pub async fn run(url: &str, analyzer: &dyn TextAnalyzer) -> Result<PipelineSummary> {
    let fetcher = PageFetcher::new(url).context("page fetch failed")?;
    let html = fetcher.fetch().await.context("page fetch failed")?;

    let text = extract_important_text(&html);
    println!("{text}");

    analyze_text(&text, analyzer).await
}

/// The analysis half of the pipeline, independent of page acquisition.
pub async fn analyze_text(text: &str, analyzer: &dyn TextAnalyzer) -> Result<PipelineSummary> {
    let entities = analyzer
        .analyze_entities(text, DocumentType::PlainText)
        .await
        .context("entity analysis failed")?;
    print_entities(&entities);

    separator();
    let wiki_links = collect_wiki_links(&entities);
    println!("Wikipedia links for discovered entities:");
    for link in &wiki_links {
        println!("{link}");
    }

    separator();
    let sentiment = analyzer
        .analyze_sentiment(text, DocumentType::PlainText)
        .await
        .context("sentiment analysis failed")?;
    print_sentiment(&sentiment);

    let score = sentiment.document_sentiment.score;
    let emoji = emoji_for_score(score);
    println!("sentiment score: {score}, emoticon: {emoji}");

    Ok(PipelineSummary {
        wiki_links,
        sentiment_score: score,
        emoji,
    })
}

fn separator() {
    println!("{}", "-".repeat(100));
}

fn print_entities(response: &AnalyzeEntitiesResponse) {
    for entity in &response.entities {
        println!("Representative name for the entity: {}", entity.name);
        println!("Entity type: {}", entity.entity_type);
        println!("Salience score: {}", entity.salience);
        for (key, value) in &entity.metadata {
            println!("{key}: {value}");
        }
        for mention in &entity.mentions {
            println!("Mention text: {}", mention.text.content);
            println!("Mention type: {}", mention.mention_type);
        }
    }
    println!("Language of the text: {}", response.language);
}

fn print_sentiment(response: &AnalyzeSentimentResponse) {
    println!(
        "Document sentiment score: {}",
        response.document_sentiment.score
    );
    println!(
        "Document sentiment magnitude: {}",
        response.document_sentiment.magnitude
    );
    for sentence in &response.sentences {
        println!("Sentence text: {}", sentence.text.content);
        println!("Sentence sentiment score: {}", sentence.sentiment.score);
        println!(
            "Sentence sentiment magnitude: {}",
            sentence.sentiment.magnitude
        );
    }
    println!("Language of the text: {}", response.language);
}
