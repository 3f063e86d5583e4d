//! Error enum

/// What exactly went wrong with an answer span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanViolationKind {
    /// `answer_start + len(text)` runs past the end of the paragraph context.
    OutOfBounds,
    /// The merged context does not carry the answer text at the remapped offset.
    TextMismatch,
}

/// A question/answer entry contradicting the corpus schema,
/// e.g. an unanswerable entry that carries answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub topic: String,
    pub question_id: String,
    pub detail: String,
}

/// An answer span that does not index its paragraph's context.
///
/// Carries enough context (topic title, paragraph index, question id) to locate
/// the offending record in the source corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanViolation {
    pub kind: SpanViolationKind,
    pub topic: String,
    pub paragraph: usize,
    pub question_id: String,
    pub start: usize,
    pub len: usize,
    pub context_len: usize,
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Schema(SchemaViolation),
    Span(SpanViolation),
    /// Quote normalization changed the character count of a string.
    /// Never triggered by corpus data: offsets are only valid if the
    /// normalization rewrite is length-preserving.
    NormalizationDrift {
        raw_len: usize,
        normalized_len: usize,
    },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<SchemaViolation> for Error {
    fn from(v: SchemaViolation) -> Error {
        Error::Schema(v)
    }
}

impl From<SpanViolation> for Error {
    fn from(v: SpanViolation) -> Error {
        Error::Span(v)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
