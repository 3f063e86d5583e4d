//! Raw corpus structures.
//!
//! The input nests topics → paragraphs → question/answer entries. Answers are
//! addressed by paragraph-local character offsets, which is what the whole
//! pipeline exists to rewrite. Field names follow the corpus file format
//! (`data`, `qas`, `answer_start`, ...).
//!
//! These are immutable snapshots: decoded once, then only read. Paragraph
//! order inside a topic is authoritative, since it decides concatenation order
//! and therefore every remapped offset.

use serde::{Deserialize, Serialize};

/// A whole raw corpus: a version string and an ordered list of topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub version: String,
    #[serde(rename = "data")]
    pub topics: Vec<Topic>,
}

/// A named group of paragraphs sharing a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

/// A contiguous block of source text with its question/answer entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub context: String,
    pub qas: Vec<QaEntry>,
}

impl Paragraph {
    /// Character length of the raw context.
    ///
    /// Offsets count characters, not bytes; contexts are not ASCII-only.
    pub fn char_len(&self) -> usize {
        self.context.chars().count()
    }
}

/// A question over a paragraph, with its answer spans.
///
/// `id` is opaque, unique across the corpus and passed through unchanged.
/// Unanswerable entries (`is_impossible`) carry an empty answer list; some
/// corpus versions omit the flag entirely, hence the serde default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaEntry {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub is_impossible: bool,
    pub answers: Vec<Answer>,
}

impl QaEntry {
    /// Schema consistency: unanswerable entries carry no answers,
    /// answerable entries carry at least one.
    pub fn answers_consistent(&self) -> bool {
        self.is_impossible == self.answers.is_empty()
    }
}

/// An answer span: `answer_start` characters into its paragraph context,
/// spanning `text.chars().count()` characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer_start: usize,
    pub text: String,
}
