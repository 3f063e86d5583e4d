use structopt::StructOpt;

#[macro_use]
extern crate log;

use topicfuse::cli;
use topicfuse::error::Error;
use topicfuse::pipelines::{Pipeline, TopicContext};
use topicfuse::processing;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::TopicFuse::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::TopicFuse::Transform(t) => {
            let pipeline = TopicContext::new(t.src, t.dst);
            let report = pipeline.run()?;
            if !report.is_clean() {
                warn!("{} topics dropped", report.failures.len());
            }
        }
        cli::TopicFuse::Check(c) => {
            processing::check(c.src)?;
        }
    };
    Ok(())
}
