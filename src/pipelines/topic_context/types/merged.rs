//! Merged corpus structures.
//!
//! Output of the pipeline: one record per topic, every paragraph context fused
//! into a single `topic_context` string and every answer offset rebased onto
//! it. QA entries keep the exact shapes of the raw corpus.

use serde::{Deserialize, Serialize};

use super::raw::QaEntry;

/// Format tag stamped on merged corpora, distinguishing them from the
/// paragraph-level input schema.
pub const FORMAT_TAG: &str = "topic-context";

/// A merged, topic-level corpus.
///
/// `version` is copied through from the raw corpus unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedCorpus {
    pub format: String,
    pub version: String,
    #[serde(rename = "data")]
    pub topics: Vec<TopicRecord>,
}

impl MergedCorpus {
    pub fn new(version: String, topics: Vec<TopicRecord>) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            version,
            topics,
        }
    }
}

/// One topic after merging: its title, the fused context string, and every QA
/// entry of the topic in corpus order, offsets now relative to `topic_context`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub title: String,
    pub topic_context: String,
    pub qas: Vec<QaEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tag_stamped() {
        let merged = MergedCorpus::new("v2.0".to_string(), Vec::new());
        assert_eq!(merged.format, FORMAT_TAG);
        assert_eq!(merged.version, "v2.0");
    }

    #[test]
    fn roundtrip() {
        let merged = MergedCorpus::new(
            "v1.1".to_string(),
            vec![TopicRecord {
                title: "t".to_string(),
                topic_context: "some context".to_string(),
                qas: Vec::new(),
            }],
        );

        let encoded = serde_json::to_string(&merged).unwrap();
        assert!(encoded.contains(r#""data":"#));

        let decoded: MergedCorpus = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, merged);
    }
}
