//! Quote normalization.
//!
//! Corpus contexts carry LaTeX-style quoting: an opening quote written as two
//! backticks and a closing quote written as two apostrophes. Both runs are
//! rewritten into a straight quote followed by a space.
//!
//! Every answer offset downstream is computed against normalized text, so the
//! rewrite has to keep the character count of its input: each 2-character run
//! becomes a 2-character replacement, and untouched characters stay in place.
//! [normalize_quotes_checked] enforces this at runtime and fails the transform
//! if the rewrite rules ever stop being length-preserving.

use crate::error::Error;

const DOUBLED_APOSTROPHE: &str = "''";
const DOUBLED_BACKTICK: &str = "``";
const STRAIGHT_QUOTE: &str = "\" ";

/// Rewrite doubled apostrophes and doubled backticks into straight quotes.
///
/// Pure, total, and in practice idempotent: the replacement introduces neither
/// apostrophes nor backticks, and characters never move.
pub fn normalize_quotes(raw: &str) -> String {
    raw.replace(DOUBLED_APOSTROPHE, STRAIGHT_QUOTE)
        .replace(DOUBLED_BACKTICK, STRAIGHT_QUOTE)
}

/// [normalize_quotes], with the length-preservation invariant checked.
///
/// Merging and remapping call this variant: a normalization that changes the
/// character count would silently desynchronize every downstream offset.
pub fn normalize_quotes_checked(raw: &str) -> Result<String, Error> {
    let normalized = normalize_quotes(raw);
    let raw_len = raw.chars().count();
    let normalized_len = normalized.chars().count();

    if raw_len != normalized_len {
        return Err(Error::NormalizationDrift {
            raw_len,
            normalized_len,
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    // characters seen in corpus contexts, quote runs included
    const ALPHABET: [char; 12] = [
        'a', 'b', 'c', 'e', ' ', ' ', '.', ',', '\'', '`', 'é', 'ß',
    ];

    fn gen_strings(nb: usize) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(4242);
        (0..nb)
            .map(|_| {
                let len = rng.gen_range(0..64);
                (0..len)
                    .map(|_| *ALPHABET.choose(&mut rng).unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn closing_quotes() {
        assert_eq!(normalize_quotes("He said ''hi''."), "He said \" hi\" .");
    }

    #[test]
    fn opening_quotes() {
        assert_eq!(normalize_quotes("``quoted`` text"), "\" quoted\"  text");
    }

    #[test]
    fn untouched() {
        let raw = "no quotes here, just a lone ' and a lone `";
        assert_eq!(normalize_quotes(raw), raw);
    }

    #[test]
    fn length_preserved() {
        for raw in [
            "He said ''hi''.",
            "``a''",
            "''''",
            "'''",
            "`'`'",
            "héllo ``wörld''",
            "",
        ] {
            let normalized = normalize_quotes(raw);
            assert_eq!(
                raw.chars().count(),
                normalized.chars().count(),
                "length drifted for {:?}",
                raw
            );
        }
    }

    #[test]
    fn length_preserved_generated() {
        for raw in gen_strings(500) {
            let normalized = normalize_quotes_checked(&raw).unwrap();
            assert_eq!(raw.chars().count(), normalized.chars().count());
        }
    }

    #[test]
    fn idempotent_generated() {
        for raw in gen_strings(500) {
            let once = normalize_quotes(&raw);
            let twice = normalize_quotes(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn checked_accepts_any_input() {
        for raw in gen_strings(100) {
            assert!(normalize_quotes_checked(&raw).is_ok());
        }
    }
}
