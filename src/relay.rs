use std::sync::OnceLock;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;
use crate::contact::{EmailParams, SubmissionFailure, SubmissionGateway};

static GLOBAL_RELAY: OnceLock<EmailRelay> = OnceLock::new();

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("couldn't reach email relay: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a EmailParams,
}

/// Client for the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Installs the relay used by the `send_email` server function. Only the first call wins.
    pub fn install(self) -> bool {
        GLOBAL_RELAY.set(self).is_ok()
    }

    pub fn global() -> Option<&'static EmailRelay> {
        GLOBAL_RELAY.get()
    }

    pub async fn deliver(&self, params: &EmailParams) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            tracing::info!(subject = %params.subject, "email relayed");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl SubmissionGateway for EmailRelay {
    async fn send(&self, params: EmailParams) -> Result<(), SubmissionFailure> {
        self.deliver(&params)
            .await
            .map_err(|err| SubmissionFailure::new(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(server: &MockServer, private_key: Option<&str>) -> RelayConfig {
        RelayConfig {
            endpoint: format!("{}/api/v1.0/email/send", server.uri()),
            service_id: "service_abc".to_string(),
            template_id: "template_def".to_string(),
            public_key: "pub_123".to_string(),
            private_key: private_key.map(str::to_string),
            timeout: Duration::from_secs(5),
        }
    }

    fn params() -> EmailParams {
        EmailParams {
            from_name: "Jane".to_string(),
            from_email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_template_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(json!({
                "service_id": "service_abc",
                "template_id": "template_def",
                "user_id": "pub_123",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@x.com",
                    "subject": "Hi",
                    "message": "Hello",
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailRelay::new(config(&server, None)).unwrap();
        relay.deliver(&params()).await.unwrap();
    }

    #[tokio::test]
    async fn test_private_key_sent_as_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "service_id": "service_abc",
                "template_id": "template_def",
                "user_id": "pub_123",
                "accessToken": "secret",
                "template_params": params(),
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailRelay::new(config(&server, Some("secret"))).unwrap();
        assert!(relay.deliver(&params()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The template ID is invalid"))
            .mount(&server)
            .await;

        let relay = EmailRelay::new(config(&server, None)).unwrap();
        match relay.deliver(&params()).await {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_gateway_maps_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let relay = EmailRelay::new(config(&server, None)).unwrap();
        let err = relay.send(params()).await.unwrap_err();
        assert!(err.reason.contains("500"));
    }
}
