use anyhow::{anyhow, Result};
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use serde_json::Value;

use crate::{token::BearerToken, SubmissionOutcome, SubmissionRequest};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts submissions to one judge endpoint.
#[derive(Debug)]
pub struct Submitter {
    client: Client,
    endpoint: String,
    token: BearerToken,
    accepted_statuses: Vec<u16>,
}

impl Submitter {
    pub fn new(
        endpoint: impl Into<String>,
        token: BearerToken,
        accepted_statuses: &[u16],
    ) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow!("Couldn't create HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
            accepted_statuses: accepted_statuses.to_vec(),
        })
    }

    /// Sends one POST and classifies the reply. A status outside the accepted
    /// set is not an error; transport failures and non-JSON success bodies are.
    pub fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionOutcome> {
        tracing::info!(
            endpoint = %self.endpoint,
            language = request.language(),
            bytes = request.code().len(),
            "sending submission"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.token.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(request)
            .send()
            .map_err(|e| anyhow!("Couldn't submit to {}: {}", self.endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| anyhow!("Couldn't read response from {}: {}", self.endpoint, e))?;
        tracing::debug!(status, bytes = body.len(), "received response");

        if self.accepted_statuses.contains(&status) {
            let response: Value = serde_json::from_str(&body)
                .map_err(|e| anyhow!("Invalid response JSON: {}", e))?;
            Ok(SubmissionOutcome::Accepted { status, response })
        } else {
            tracing::warn!(status, "submission was not accepted");
            Ok(SubmissionOutcome::Rejected { status, body })
        }
    }
}
