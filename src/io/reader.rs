//! Corpus decoding.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;
use crate::pipelines::topic_context::types::{Corpus, MergedCorpus};

/// Decode a raw corpus from any [Read].
pub fn from_read<R: Read>(src: R) -> Result<Corpus, Error> {
    Ok(serde_json::from_reader(src)?)
}

/// Decode a raw corpus file.
pub fn from_path(src: &Path) -> Result<Corpus, Error> {
    let file = File::open(src)?;
    from_read(BufReader::new(file))
}

/// Decode an already-merged corpus file.
pub fn merged_from_path(src: &Path) -> Result<MergedCorpus, Error> {
    let file = File::open(src)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
