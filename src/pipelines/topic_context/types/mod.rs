//! Corpus types: raw (paragraph-level) and merged (topic-level).

mod merged;
mod raw;

pub use merged::{MergedCorpus, TopicRecord, FORMAT_TAG};
pub use raw::{Answer, Corpus, Paragraph, QaEntry, Topic};
