//! Span remapping against a merged topic context.
//!
//! Rebasing an answer is one addition: its paragraph-local offset plus the
//! paragraph's start inside the merged context. Everything else here is
//! validation, because the raw corpus cannot be trusted to hold its own
//! offset invariant, and an invalid span must fail the topic loudly rather
//! than land corrupted in the output.

use crate::error::{Error, SchemaViolation, SpanViolation, SpanViolationKind};

use super::merge::MergedTopic;
use super::types::{Answer, QaEntry, Topic};

/// The `len`-character span of `text` starting at character `start`.
///
/// Returns [None] if the span runs past the end of `text`. Offsets count
/// characters, not bytes, matching the corpus addressing scheme.
pub fn char_span(text: &str, start: usize, len: usize) -> Option<&str> {
    let mut bounds = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()));

    let begin = bounds.nth(start)?;
    let end = if len == 0 { begin } else { bounds.nth(len - 1)? };

    Some(&text[begin..end])
}

/// Rebase every answer of `topic` onto its merged context.
///
/// Entries come out in corpus order: paragraph by paragraph, question by
/// question. Unanswerable entries pass through with empty answers and no
/// offset computation; paragraphs without entries contribute nothing here but
/// already took part in offset accumulation during merging.
///
/// The first schema or span inconsistency fails the whole topic: a topic that
/// lies about one span cannot be trusted to produce valid offsets at all.
pub fn remap_topic(topic: &Topic, merged: &MergedTopic) -> Result<Vec<QaEntry>, Error> {
    debug_assert_eq!(merged.offsets.len(), topic.paragraphs.len());

    let mut qas = Vec::new();

    for (paragraph_idx, paragraph) in topic.paragraphs.iter().enumerate() {
        let base = merged.offsets[paragraph_idx];
        let context_len = paragraph.char_len();

        for qa in &paragraph.qas {
            if !qa.answers_consistent() {
                let detail = if qa.is_impossible {
                    "unanswerable entry carries answers"
                } else {
                    "answerable entry carries no answers"
                };
                return Err(SchemaViolation {
                    topic: topic.title.clone(),
                    question_id: qa.id.clone(),
                    detail: detail.to_string(),
                }
                .into());
            }

            let mut answers = Vec::with_capacity(qa.answers.len());
            for answer in &qa.answers {
                let len = answer.text.chars().count();
                let violation = |kind| SpanViolation {
                    kind,
                    topic: topic.title.clone(),
                    paragraph: paragraph_idx,
                    question_id: qa.id.clone(),
                    start: answer.answer_start,
                    len,
                    context_len,
                };

                if answer.answer_start + len > context_len {
                    return Err(violation(SpanViolationKind::OutOfBounds).into());
                }

                let start = base + answer.answer_start;
                match char_span(&merged.context, start, len) {
                    Some(span) if span == answer.text => answers.push(Answer {
                        answer_start: start,
                        text: answer.text.clone(),
                    }),
                    // either the raw span never matched its context, or it
                    // overlaps a rewritten quote run
                    _ => return Err(violation(SpanViolationKind::TextMismatch).into()),
                }
            }

            qas.push(QaEntry {
                id: qa.id.clone(),
                question: qa.question.clone(),
                is_impossible: qa.is_impossible,
                answers,
            });
        }
    }

    Ok(qas)
}
