//! Wikipedia link collection from entity metadata.

use crate::types::AnalyzeEntitiesResponse;

/// Metadata key the service uses for an entity's Wikipedia article.
pub const WIKIPEDIA_URL_KEY: &str = "wikipedia_url";

/// Collect the Wikipedia URL of every entity that has one.
///
/// Entities are visited in response order and each entity's metadata in its
/// own (response) order; entities without a `wikipedia_url` entry contribute
/// nothing. Links are neither deduplicated nor sorted by salience.
pub fn collect_wiki_links(response: &AnalyzeEntitiesResponse) -> Vec<String> {
    let mut links = Vec::new();
    for entity in &response.entities {
        for (key, value) in &entity.metadata {
            if key == WIKIPEDIA_URL_KEY {
                links.push(value.clone());
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entity;
    use indexmap::IndexMap;

    fn entity_with_metadata(pairs: &[(&str, &str)]) -> Entity {
        let metadata: IndexMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Entity {
            name: "e".into(),
            entity_type: Default::default(),
            salience: 0.0,
            metadata,
            mentions: vec![],
        }
    }

    #[test]
    fn collects_links_in_response_order() {
        let response = AnalyzeEntitiesResponse {
            entities: vec![
                entity_with_metadata(&[(
                    "wikipedia_url",
                    "http://en.wikipedia.org/wiki/A",
                )]),
                entity_with_metadata(&[]),
                entity_with_metadata(&[(
                    "wikipedia_url",
                    "http://en.wikipedia.org/wiki/B",
                )]),
            ],
            language: "en".into(),
        };

        assert_eq!(
            collect_wiki_links(&response),
            vec![
                "http://en.wikipedia.org/wiki/A",
                "http://en.wikipedia.org/wiki/B",
            ]
        );
    }

    #[test]
    fn empty_entity_list_yields_empty_list() {
        let response = AnalyzeEntitiesResponse::default();
        assert!(collect_wiki_links(&response).is_empty());
    }

    #[test]
    fn other_metadata_keys_are_ignored() {
        let response = AnalyzeEntitiesResponse {
            entities: vec![entity_with_metadata(&[
                ("mid", "/m/01n7q"),
                ("wikipedia_url", "http://en.wikipedia.org/wiki/California"),
            ])],
            language: "en".into(),
        };
        assert_eq!(
            collect_wiki_links(&response),
            vec!["http://en.wikipedia.org/wiki/California"]
        );
    }

    #[test]
    fn duplicate_links_are_kept() {
        let response = AnalyzeEntitiesResponse {
            entities: vec![
                entity_with_metadata(&[("wikipedia_url", "http://en.wikipedia.org/wiki/A")]),
                entity_with_metadata(&[("wikipedia_url", "http://en.wikipedia.org/wiki/A")]),
            ],
            language: "en".into(),
        };
        assert_eq!(collect_wiki_links(&response).len(), 2);
    }
}
