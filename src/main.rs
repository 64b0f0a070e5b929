use std::path::PathBuf;

use acmoj_submit::{
    submission_log::append_submission_id, submit_endpoint, token::BearerToken, SubmissionRequest,
    Submitter, Target, DEFAULT_API_BASE, DEFAULT_LANGUAGE, DEFAULT_LOG_PATH,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Submits a source file to the ACM Online Judge and records the submission ID.
///
/// The bearer token is read from the ACMOJ_TOKEN environment variable.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Problem to submit to; selects the default source file, problem ID and accepted status codes
    #[clap(value_enum)]
    target: Target,

    /// Path to the source file, overriding the target's default
    #[clap(short, long)]
    source: Option<PathBuf>,

    /// Problem ID, overriding the target's default
    #[clap(short, long)]
    problem: Option<u32>,

    /// Root of the judge API
    #[clap(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// HTTP status codes treated as success, comma separated
    #[clap(long, value_delimiter = ',')]
    accept: Vec<u16>,

    /// Language tag sent with the submission
    #[clap(short, long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// File the submission ID is appended to
    #[clap(long, default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Print the outcome as JSON
    #[clap(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let opts: Opts = Opts::parse();

    let source = opts
        .source
        .clone()
        .unwrap_or_else(|| opts.target.source_path());
    let problem_id = opts.problem.unwrap_or_else(|| opts.target.problem_id());
    let accepted_statuses = if opts.accept.is_empty() {
        opts.target.accepted_statuses().to_vec()
    } else {
        opts.accept.clone()
    };

    let request = SubmissionRequest::from_file(&opts.language, &source)?;
    let token = BearerToken::from_env()?;
    let submitter = Submitter::new(
        submit_endpoint(&opts.api_base, problem_id),
        token,
        &accepted_statuses,
    )?;

    let outcome = submitter.submit(&request)?;

    if opts.json {
        println!("{}", outcome.to_json());
    } else {
        println!("{outcome}");
    }

    if let Some(id) = outcome.submission_id() {
        append_submission_id(&opts.log, &id)?;
    }

    Ok(())
}
