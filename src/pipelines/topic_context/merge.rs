//! Topic context merging.
//!
//! Paragraph contexts are normalized and concatenated in declared order, with
//! no separator. Answer offsets stay paragraph-local until remapping, so the
//! merger also records where each paragraph starts inside the merged string.
//!
//! The offsets come out of the same single forward pass that builds the
//! string: each paragraph's start is the running character count at the moment
//! it is appended. There is no second, out-of-order recomputation that could
//! drift from the actual concatenation.

use crate::error::Error;
use crate::transformers::normalize_quotes_checked;

use super::types::Paragraph;

/// A topic's paragraphs fused into one context string.
///
/// `offsets[i]` is the character offset of paragraph `i`'s first character in
/// `context`; `offsets[0]` is always 0. A paragraph with empty context
/// contributes a zero-length increment, so consecutive offsets may be equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTopic {
    pub context: String,
    pub offsets: Vec<usize>,
}

/// Merge paragraph contexts into a single normalized string.
///
/// Fails only if quote normalization stops being length-preserving, which is a
/// defect in the normalizer, not in corpus data.
pub fn merge_paragraphs(paragraphs: &[Paragraph]) -> Result<MergedTopic, Error> {
    let mut context = String::new();
    let mut offsets = Vec::with_capacity(paragraphs.len());
    let mut cursor = 0usize;

    for paragraph in paragraphs {
        let normalized = normalize_quotes_checked(&paragraph.context)?;
        offsets.push(cursor);
        cursor += normalized.chars().count();
        context.push_str(&normalized);
    }

    Ok(MergedTopic { context, offsets })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn gen_paragraphs(contexts: &[&str]) -> Vec<Paragraph> {
        contexts
            .iter()
            .map(|c| Paragraph {
                context: c.to_string(),
                qas: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn two_paragraphs() {
        let paragraphs = gen_paragraphs(&["Hi there.", "Second par."]);
        let merged = merge_paragraphs(&paragraphs).unwrap();

        assert_eq!(merged.context, "Hi there.Second par.");
        assert_eq!(merged.offsets, vec![0, 9]);
    }

    #[test]
    fn no_paragraphs() {
        let merged = merge_paragraphs(&[]).unwrap();
        assert_eq!(merged.context, "");
        assert!(merged.offsets.is_empty());
    }

    #[test]
    fn empty_paragraph_in_the_middle() {
        let paragraphs = gen_paragraphs(&["abc", "", "def"]);
        let merged = merge_paragraphs(&paragraphs).unwrap();

        assert_eq!(merged.context, "abcdef");
        // the empty paragraph starts where the next one does
        assert_eq!(merged.offsets, vec![0, 3, 3]);
    }

    #[test]
    fn quotes_are_normalized() {
        let paragraphs = gen_paragraphs(&["He said ''hi''.", "``sure``"]);
        let merged = merge_paragraphs(&paragraphs).unwrap();

        assert_eq!(merged.context, "He said \" hi\" .\" sure\" ");
        // normalization is length-preserving, so offsets match the raw lengths
        assert_eq!(merged.offsets, vec![0, 15]);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let paragraphs = gen_paragraphs(&["héé", "x"]);
        let merged = merge_paragraphs(&paragraphs).unwrap();
        assert_eq!(merged.offsets, vec![0, 3]);
    }

    #[test]
    fn offsets_monotonic_generated() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            let nb = rng.gen_range(0..12);
            let contexts: Vec<String> = (0..nb)
                .map(|_| {
                    let len = if rng.gen_bool(0.2) {
                        0
                    } else {
                        rng.gen_range(1..40)
                    };
                    (0..len)
                        .map(|_| if rng.gen_bool(0.1) { '\'' } else { 'w' })
                        .collect()
                })
                .collect();

            let paragraphs: Vec<Paragraph> = contexts
                .iter()
                .map(|c| Paragraph {
                    context: c.clone(),
                    qas: Vec::new(),
                })
                .collect();

            let merged = merge_paragraphs(&paragraphs).unwrap();
            assert_eq!(merged.offsets.len(), paragraphs.len());

            for i in 1..merged.offsets.len() {
                assert!(merged.offsets[i - 1] <= merged.offsets[i]);
                // equality only after an empty paragraph
                if merged.offsets[i - 1] == merged.offsets[i] {
                    assert!(paragraphs[i - 1].context.is_empty());
                }
            }

            if let Some(last) = merged.offsets.last() {
                let last_len = paragraphs.last().unwrap().char_len();
                assert_eq!(last + last_len, merged.context.chars().count());
            }
        }
    }
}
