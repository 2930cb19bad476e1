use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::config::RelayCredentials;

use super::TemplateParams;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl RelayError {
    /// Message shown to the visitor. The provider's own text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => super::RELAY_FAILED_MESSAGE.to_string(),
        }
    }
}

pub trait EmailRelay {
    fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<(), RelayError>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(EMAILJS_SEND_URL)
    }
}

impl EmailJsRelay {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn request(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> reqwest::RequestBuilder {
        self.http.post(&self.endpoint).json(&SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        })
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> Result<(), RelayError> {
        log::debug!(
            "sending contact message via relay service {}",
            credentials.service_id
        );
        let resp = self.request(credentials, params).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn credentials() -> RelayCredentials {
        RelayCredentials {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "public_123".to_string(),
        }
    }

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
            to_email: "me@example.com".to_string(),
            reply_to: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_request_shape() {
        let relay = EmailJsRelay::default();
        let req = relay.request(&credentials(), &params()).build().unwrap();
        assert_eq!(req.url().as_str(), EMAILJS_SEND_URL);

        let body: serde_json::Value =
            serde_json::from_slice(req.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "public_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "subject": "Hello",
                    "message": "Hi there",
                    "to_email": "me@example.com",
                    "reply_to": "ada@example.com"
                }
            })
        );
    }

    #[test]
    fn test_user_message() {
        let rejected = RelayError::Rejected {
            status: 400,
            message: "The template ID is invalid".to_string(),
        };
        assert_eq!(rejected.user_message(), "The template ID is invalid");

        let blank = RelayError::Rejected {
            status: 500,
            message: String::new(),
        };
        assert_eq!(blank.user_message(), super::super::RELAY_FAILED_MESSAGE);
    }
}
