//! Merged corpus serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::pipelines::topic_context::types::MergedCorpus;

/// Serialize a merged corpus into any [Write].
pub fn to_write<W: Write>(dst: W, corpus: &MergedCorpus) -> Result<(), Error> {
    Ok(serde_json::to_writer(dst, corpus)?)
}

/// Serialize a merged corpus to a file, replacing it if present.
pub fn to_path(dst: &Path, corpus: &MergedCorpus) -> Result<(), Error> {
    let file = File::create(dst)?;
    let mut buffered = BufWriter::new(file);
    to_write(&mut buffered, corpus)?;
    Ok(buffered.flush()?)
}
