//! Sentiment score to emoji mapping.

/// Map a document sentiment score in [-1, 1] to an emoji.
///
/// Branches are evaluated in order, first match wins; the upper thresholds
/// are strict, the lower ones inclusive, so 0.5 is 😊 rather than 😃 and
/// -0.5 is 👿 rather than 💀. Total for every finite score; NaN is outside
/// the service contract and not handled.
pub fn emoji_for_score(score: f32) -> &'static str {
    if score > 0.5 {
        "😃"
    } else if score > 0.25 {
        "😊"
    } else if score > 0.0 {
        "🙂"
    } else if score == 0.0 {
        "😐"
    } else if score >= -0.25 {
        "😠"
    } else if score >= -0.5 {
        "👿"
    } else {
        "💀"
    }
}
