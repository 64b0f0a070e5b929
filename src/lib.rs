pub mod submission;
pub mod submission_log;
pub mod submission_result;
pub mod submitter;
pub mod token;
use clap::ValueEnum;
use std::path::PathBuf;

pub use submission::SubmissionRequest;
pub use submission_result::{SubmissionId, SubmissionOutcome};
pub use submitter::Submitter;

pub const DEFAULT_API_BASE: &str = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1";
pub const DEFAULT_LOG_PATH: &str = "/workspace/submission_ids.log";
pub const DEFAULT_LANGUAGE: &str = "cpp";

/// Problems this repository submits to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Target {
    /// `src/include/client.h` to problem 2877.
    Client,
    /// `src/include/server.h` to problem 2876.
    Server,
}

impl Target {
    pub fn source_path(self) -> PathBuf {
        match self {
            Target::Client => PathBuf::from("src/include/client.h"),
            Target::Server => PathBuf::from("src/include/server.h"),
        }
    }

    pub fn problem_id(self) -> u32 {
        match self {
            Target::Client => 2877,
            Target::Server => 2876,
        }
    }

    /// Status codes treated as a successful submission.
    pub fn accepted_statuses(self) -> &'static [u16] {
        match self {
            Target::Client => &[200, 201],
            Target::Server => &[200],
        }
    }
}

/// `<api_base>/problem/<problem_id>/submit`
pub fn submit_endpoint(api_base: &str, problem_id: u32) -> String {
    format!(
        "{}/problem/{}/submit",
        api_base.trim_end_matches('/'),
        problem_id
    )
}
