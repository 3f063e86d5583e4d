//! Topic context generation pipeline.
//!
//! The raw corpus nests topics → paragraphs → QA entries, with answers
//! addressed by paragraph-local character offsets.
//!
//! # Processing
//! 1. The raw corpus is fully decoded into memory.
//! 1. Each topic is transformed independently, and therefore in parallel:
//!    paragraph contexts are normalized and merged in declared order, then
//!    every answer offset is rebased onto the merged context.
//! 1. Topics failing schema or span validation are dropped from the output and
//!    reported; the remaining ones are serialized in input order.

use std::path::PathBuf;

use itertools::Itertools;
use log::{error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::io;
use crate::pipelines::pipeline::Pipeline;

use super::merge::merge_paragraphs;
use super::remap::remap_topic;
use super::types::{Corpus, MergedCorpus, Topic, TopicRecord};

/// A topic that could not be transformed, kept for the batch report.
#[derive(Debug)]
pub struct TopicFailure {
    pub index: usize,
    pub title: String,
    pub error: Error,
}

/// Outcome of a corpus transformation.
///
/// A batch transform reports every failing topic in one pass instead of
/// aborting on the first one.
#[derive(Debug, Default)]
pub struct TransformReport {
    pub transformed: usize,
    pub failures: Vec<TopicFailure>,
}

impl TransformReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for end-of-run logging.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("{} topics transformed", self.transformed)
        } else {
            let titles = self.failures.iter().map(|f| f.title.as_str()).join(", ");
            format!(
                "{} topics transformed, {} dropped ({})",
                self.transformed,
                self.failures.len(),
                titles
            )
        }
    }
}

/// Transform a single topic: merge its paragraph contexts, rebase its spans.
pub fn transform_topic(topic: &Topic) -> Result<TopicRecord, Error> {
    let merged = merge_paragraphs(&topic.paragraphs)?;
    let qas = remap_topic(topic, &merged)?;

    Ok(TopicRecord {
        title: topic.title.clone(),
        topic_context: merged.context,
        qas,
    })
}

/// Transform a whole corpus, topic by topic.
///
/// Topics share no state, so they are processed in parallel; the ordered
/// collect puts each result back into its input-order slot regardless of
/// completion order. A failing topic is excluded from the output corpus and
/// recorded in the report instead of aborting the run.
pub fn transform_corpus(corpus: &Corpus) -> (MergedCorpus, TransformReport) {
    let results: Vec<Result<TopicRecord, Error>> =
        corpus.topics.par_iter().map(transform_topic).collect();

    let mut report = TransformReport::default();
    let mut records = Vec::with_capacity(results.len());

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(error) => report.failures.push(TopicFailure {
                index,
                title: corpus.topics[index].title.clone(),
                error,
            }),
        }
    }

    report.transformed = records.len();
    (MergedCorpus::new(corpus.version.clone(), records), report)
}

/// File-to-file topic context pipeline.
///
/// Source and destination are explicit constructor inputs; the transform
/// itself is a pure function of the decoded corpus.
pub struct TopicContext {
    src: PathBuf,
    dst: PathBuf,
}

impl TopicContext {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }
}

impl Pipeline<TransformReport> for TopicContext {
    fn run(&self) -> Result<TransformReport, Error> {
        info!("reading corpus from {:?}", self.src);
        let corpus = io::reader::from_path(&self.src)?;
        info!(
            "got {} topics (corpus version {})",
            corpus.topics.len(),
            corpus.version
        );

        let (merged, report) = transform_corpus(&corpus);

        for failure in &report.failures {
            error!(
                "topic {} ({:?}) dropped: {:?}",
                failure.index, failure.title, failure.error
            );
        }

        io::writer::to_path(&self.dst, &merged)?;
        info!("{}", report.summary());

        Ok(report)
    }
}
