//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "topicfuse", about = "QA corpus restructuring tool.")]
/// Holds every command that is callable by the `topicfuse` command.
pub enum TopicFuse {
    #[structopt(about = "Merge paragraph contexts into topic-level contexts")]
    Transform(Transform),
    #[structopt(about = "Validate answer spans of a merged corpus")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Transform command and parameters.
pub struct Transform {
    #[structopt(parse(from_os_str), help = "raw corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "merged corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "merged corpus file")]
    pub src: PathBuf,
}
