//! Allow-list text extraction from parsed HTML.

use scraper::{ElementRef, Html};

/// Tags whose text is considered important enough to analyse.
///
/// `head` is in the list on purpose even though it repeats the `title` text:
/// the extractor collects every matching element in document order and keeps
/// duplicates, so downstream stages see the same text block the service
/// always saw.
pub const IMPORTANT_TAGS: [&str; 8] = ["title", "head", "thead", "h1", "h2", "h3", "h4", "p"];

/// Collect the text of every allow-listed element, in document order,
/// joined with newlines.
///
/// Malformed markup is parsed permissively and never produces an error; the
/// worst case is an empty string. The function is pure, so equal input
/// always yields equal output.
pub fn extract_important_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut blocks: Vec<String> = Vec::new();
    for node in document.root_element().descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            let name = element.value().name();
            if IMPORTANT_TAGS.contains(&name) {
                blocks.push(element.text().collect::<String>());
            }
        }
    }

    tracing::debug!(
        element_count = blocks.len(),
        text_len = blocks.iter().map(String::len).sum::<usize>(),
        "extract.important_text"
    );

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<html><head><title>T</title></head><body><h1>H</h1><p>P</p><div>ignored</div></body></html>";

    #[test]
    fn keeps_allow_listed_tags_in_document_order() {
        let text = extract_important_text(SAMPLE);
        let lines: Vec<&str> = text.lines().collect();

        // head comes before its own title child, then the body headings.
        assert_eq!(lines, vec!["T", "T", "H", "P"]);
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn is_idempotent_for_equal_input() {
        assert_eq!(extract_important_text(SAMPLE), extract_important_text(SAMPLE));
    }

    #[test]
    fn tolerates_broken_markup() {
        let text = extract_important_text("<h1>open heading<p>paragraph");
        assert!(text.contains("open heading"));
        assert!(text.contains("paragraph"));
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(extract_important_text(""), "");
    }

    #[test]
    fn table_headers_are_included() {
        let html = "<table><thead><tr><th>Year</th></tr></thead><tbody><tr><td>2021</td></tr></tbody></table>";
        let text = extract_important_text(html);
        assert!(text.contains("Year"));
        assert!(!text.contains("2021"));
    }
}
