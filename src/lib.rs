//! # Topicfuse
//!
//! Topicfuse restructures a paragraph-level question answering corpus into a
//! topic-level one: every paragraph of a topic is fused into a single
//! contiguous context string, and every answer's character offset is rebased
//! so that it stays valid against the fused string.
//!
//! The crate can be used as a command line tool, or as a lib to run the
//! transform on already-decoded corpora.
//!
//! ## Getting started
//!
//! ```sh
//! topicfuse 0.1.0
//! QA corpus restructuring tool.
//!
//! USAGE:
//!     topicfuse <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check        Validate answer spans of a merged corpus
//!     help         Prints this message or the help of the given subcommand(s)
//!     transform    Merge paragraph contexts into topic-level contexts
//! ```
//!
pub mod cli;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod transformers;
