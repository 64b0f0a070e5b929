use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier the judge assigns to a submission. Kept as the JSON value the
/// server sent; strings render without quotes, anything else (`null`
/// included) as its JSON text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionId(Value);

impl SubmissionId {
    pub fn from_json(value: &Value) -> Self {
        Self(value.clone())
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            value => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Status was in the accepted set and the body parsed as JSON.
    Accepted { status: u16, response: Value },
    /// Any other status; the body is kept verbatim.
    Rejected { status: u16, body: String },
}

#[derive(Serialize)]
struct SubmissionReport<'a> {
    status: u16,
    accepted: bool,
    response: ReportBody<'a>,
    id: Option<SubmissionId>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ReportBody<'a> {
    Json(&'a Value),
    Text(&'a str),
}

impl SubmissionOutcome {
    pub fn status(&self) -> u16 {
        match self {
            SubmissionOutcome::Accepted { status, .. }
            | SubmissionOutcome::Rejected { status, .. } => *status,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// The top-level `id` of an accepted response whenever the key is
    /// present, whatever its value.
    pub fn submission_id(&self) -> Option<SubmissionId> {
        match self {
            SubmissionOutcome::Accepted { response, .. } => response
                .as_object()
                .and_then(|object| object.get("id"))
                .map(SubmissionId::from_json),
            SubmissionOutcome::Rejected { .. } => None,
        }
    }

    pub fn to_json(&self) -> String {
        let response = match self {
            SubmissionOutcome::Accepted { response, .. } => ReportBody::Json(response),
            SubmissionOutcome::Rejected { body, .. } => ReportBody::Text(body),
        };
        let report = SubmissionReport {
            status: self.status(),
            accepted: self.is_accepted(),
            response,
            id: self.submission_id(),
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| error.to_string())
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmissionOutcome::Accepted { response, .. } => {
                write!(
                    f,
                    "{}",
                    serde_json::to_string_pretty(response)
                        .unwrap_or_else(|error| error.to_string())
                )?;
                if let Some(id) = self.submission_id() {
                    write!(f, "\n\n{} {}", "Submission ID:".green(), id)?;
                }
            }
            SubmissionOutcome::Rejected { status, body } => {
                writeln!(
                    f,
                    "{}",
                    format!("Submission failed with status code: {status}").red()
                )?;
                write!(f, "Response: {body}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn accepted(response: Value) -> SubmissionOutcome {
        SubmissionOutcome::Accepted {
            status: 200,
            response,
        }
    }

    #[test]
    fn test_numeric_id() {
        let id = accepted(json!({ "id": 123 })).submission_id().unwrap();
        assert_eq!("123", id.to_string());
        assert_eq!(&json!(123), id.as_json());
    }

    #[test]
    fn test_string_id_has_no_quotes() {
        let id = accepted(json!({ "id": "a1b2" })).submission_id().unwrap();
        assert_eq!("a1b2", id.to_string());
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(None, accepted(json!({ "message": "ok" })).submission_id());
        assert_eq!(None, accepted(json!([{ "id": 1 }])).submission_id());
    }

    #[test]
    fn test_null_id_is_present() {
        let id = accepted(json!({ "id": null })).submission_id().unwrap();
        assert_eq!("null", id.to_string());
    }

    #[test]
    fn test_display_keeps_non_ascii() {
        colored::control::set_override(false);
        let outcome = accepted(json!({ "message": "提交成功 ✓" }));
        assert_eq!(
            "{\n  \"message\": \"提交成功 ✓\"\n}",
            outcome.to_string()
        );
    }

    #[test]
    fn test_rejected_has_no_id() {
        let outcome = SubmissionOutcome::Rejected {
            status: 500,
            body: r#"{"id": 1}"#.to_string(),
        };
        assert_eq!(None, outcome.submission_id());
        assert!(!outcome.is_accepted());
        assert_eq!(500, outcome.status());
    }

    #[test]
    fn test_display_accepted() {
        colored::control::set_override(false);
        let outcome = accepted(json!({ "id": 123 }));
        assert_eq!("{\n  \"id\": 123\n}\n\nSubmission ID: 123", outcome.to_string());
    }

    #[test]
    fn test_display_accepted_without_id() {
        colored::control::set_override(false);
        let outcome = accepted(json!({ "status": "queued" }));
        assert_eq!("{\n  \"status\": \"queued\"\n}", outcome.to_string());
    }

    #[test]
    fn test_display_rejected() {
        colored::control::set_override(false);
        let outcome = SubmissionOutcome::Rejected {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            "Submission failed with status code: 500\nResponse: Internal Server Error",
            outcome.to_string()
        );
    }

    #[test]
    fn test_json_report() {
        let report: Value =
            serde_json::from_str(&accepted(json!({ "id": "x9" })).to_json()).unwrap();
        assert_eq!(
            json!({
                "status": 200,
                "accepted": true,
                "response": { "id": "x9" },
                "id": "x9"
            }),
            report
        );

        let rejected = SubmissionOutcome::Rejected {
            status: 403,
            body: "forbidden".to_string(),
        };
        let report: Value = serde_json::from_str(&rejected.to_json()).unwrap();
        assert_eq!(
            json!({
                "status": 403,
                "accepted": false,
                "response": "forbidden",
                "id": null
            }),
            report
        );
    }
}
