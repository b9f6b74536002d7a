use std::fmt;
use std::time::Duration;

use super::submission::{FormSubmission, FormsGateway, SubmissionError};
use crate::config::HubSpotConfig;

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Forms API client speaking the v3 form-submission endpoint.
///
/// The endpoint URL is validated at construction so a malformed
/// `HUBSPOT_BASE_URL` surfaces at startup, not on the first visitor
/// submission. Each dispatch uses a short-lived blocking client; the router
/// always invokes the gateway off the async runtime.
pub struct HubSpotFormsClient {
    endpoint: String,
    config: HubSpotConfig,
}

impl HubSpotFormsClient {
    pub fn new(config: HubSpotConfig) -> Result<Self, SubmissionError> {
        let endpoint = format!(
            "{}/{}/{}",
            config.base_url.trim_end_matches('/'),
            config.portal_id,
            config.form_id
        );
        reqwest::Url::parse(&endpoint).map_err(|err| SubmissionError::Endpoint {
            url: endpoint.clone(),
            reason: err.to_string(),
        })?;

        Ok(Self { endpoint, config })
    }
}

impl fmt::Debug for HubSpotFormsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSpotFormsClient")
            .field("portal_id", &self.config.portal_id)
            .field("form_id", &self.config.form_id)
            .finish_non_exhaustive()
    }
}

impl FormsGateway for HubSpotFormsClient {
    fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(SUBMIT_TIMEOUT)
            .build()
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> HubSpotConfig {
        HubSpotConfig {
            portal_id: "21449360".to_string(),
            form_id: "c7e82b43-5e1a-4f7d-9c0e-6b2a84d55f3a".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn builds_the_portal_scoped_endpoint() {
        let client = HubSpotFormsClient::new(config(
            "https://api.hsforms.com/submissions/v3/integration/submit/",
        ))
        .expect("valid endpoint");
        assert_eq!(
            client.endpoint,
            "https://api.hsforms.com/submissions/v3/integration/submit/21449360/c7e82b43-5e1a-4f7d-9c0e-6b2a84d55f3a"
        );
    }

    #[test]
    fn rejects_an_unparseable_base_url() {
        let err = HubSpotFormsClient::new(config("not a url")).expect_err("url rejected");
        assert!(err.to_string().contains("not a url"));
    }
}
