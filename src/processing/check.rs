//! Offline span verification of a generated corpus.
//!
//! Re-validates the contract a merged corpus is supposed to hold: every
//! answer's offset indexes exactly its text inside the topic context. Useful
//! on corpora produced by older tooling or edited by hand.

use std::path::PathBuf;

use log::{error, info};

use crate::error::Error;
use crate::io;
use crate::pipelines::topic_context::remap::char_span;

/// Verify every answer span of an already-merged corpus.
///
/// Violations are logged individually; the totals go to stdout. Returns an
/// error if any span fails.
pub fn check(src: PathBuf) -> Result<(), Error> {
    info!("checking merged corpus {:?}", src);
    let corpus = io::reader::merged_from_path(&src)?;

    let mut answers = 0u64;
    let mut violations = 0u64;

    for record in &corpus.topics {
        for qa in &record.qas {
            for answer in &qa.answers {
                answers += 1;
                let len = answer.text.chars().count();
                match char_span(&record.topic_context, answer.answer_start, len) {
                    Some(span) if span == answer.text => (),
                    _ => {
                        violations += 1;
                        error!(
                            "bad span in {:?}, question {}: offset {} does not carry {:?}",
                            record.title, qa.id, answer.answer_start, answer.text
                        );
                    }
                }
            }
        }
    }

    println!(
        "{} topics, {} answers checked, {} violations",
        corpus.topics.len(),
        answers,
        violations
    );

    if violations == 0 {
        Ok(())
    } else {
        Err(Error::Custom(format!("{} invalid spans", violations)))
    }
}
