//! Contact form submission.
//!
//! The primary path hands the form to an email relay. When the relay is not
//! configured or refuses the message, the visitor gets an error and a
//! `mailto:` fallback is scheduled, so there is always a way to reach out.

pub mod relay;

use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{
    config::{RelayConfig, SiteConfig},
    model::PersonalInfo,
};

pub use relay::{EmailJsRelay, EmailRelay, RelayError};

/// How long the error stays up before the mail client is opened.
pub const FALLBACK_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";
pub const UNCONFIGURED_MESSAGE: &str = "Email service not configured. Using direct email fallback.";
pub const RELAY_FAILED_MESSAGE: &str = "Email service failed. Using email client fallback.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Parameters handed to the relay's message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn new(form: &ContactForm, recipient: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            to_email: recipient.to_string(),
            reply_to: form.email.clone(),
        }
    }
}

/// Where messages go: the backend's email, then the configured address.
pub fn resolve_recipient(info: Option<&PersonalInfo>, config: &SiteConfig) -> String {
    info.map(|i| i.email.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .or_else(|| config.contact_email.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn new(recipient: &str, form: &ContactForm) -> Self {
        let subject = if form.subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            form.subject.clone()
        };
        Self {
            recipient: recipient.to_string(),
            subject,
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                form.name, form.email, form.message
            ),
        }
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Moves to `Submitting` unless a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmitStatus::Submitting;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Unconfigured { fallback: MailtoLink },
    Failed { message: String, fallback: MailtoLink },
}

impl SubmitOutcome {
    /// Every outcome leaves `Submitting`.
    pub fn status(&self) -> SubmitStatus {
        match self {
            SubmitOutcome::Sent => SubmitStatus::Success,
            SubmitOutcome::Unconfigured { .. } => {
                SubmitStatus::Error(UNCONFIGURED_MESSAGE.to_string())
            }
            SubmitOutcome::Failed { message, .. } => SubmitStatus::Error(message.clone()),
        }
    }

    /// Link to open after [`FALLBACK_DELAY`], if any.
    pub fn fallback(&self) -> Option<&MailtoLink> {
        match self {
            SubmitOutcome::Sent => None,
            SubmitOutcome::Unconfigured { fallback } | SubmitOutcome::Failed { fallback, .. } => {
                Some(fallback)
            }
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Runs one submission. Makes at most one relay call, none when unconfigured.
pub async fn submit<R: EmailRelay>(
    relay: &R,
    relay_config: &RelayConfig,
    recipient: &str,
    form: &ContactForm,
) -> SubmitOutcome {
    let fallback = MailtoLink::new(recipient, form);
    let Some(credentials) = relay_config.credentials() else {
        log::error!("Email relay configuration missing. Using mailto fallback.");
        return SubmitOutcome::Unconfigured { fallback };
    };

    let params = TemplateParams::new(form, recipient);
    match relay.send(credentials, &params).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => {
            log::error!("Failed to send email: {e}");
            SubmitOutcome::Failed {
                message: e.user_message(),
                fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayCredentials;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRelay {
        calls: RefCell<Vec<TemplateParams>>,
        reject_with: Option<String>,
    }

    impl EmailRelay for RecordingRelay {
        async fn send(
            &self,
            _credentials: &RelayCredentials,
            params: &TemplateParams,
        ) -> Result<(), RelayError> {
            self.calls.borrow_mut().push(params.clone());
            match &self.reject_with {
                Some(message) => Err(RelayError::Rejected {
                    status: 400,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Let's talk".to_string(),
            message: "Hello!\nSecond line".to_string(),
        }
    }

    fn configured() -> RelayConfig {
        RelayConfig::Configured(RelayCredentials {
            service_id: "service".to_string(),
            template_id: "template".to_string(),
            public_key: "key".to_string(),
        })
    }

    #[tokio::test]
    async fn test_configured_submit_sends_once() {
        let relay = RecordingRelay::default();
        let outcome = submit(&relay, &configured(), "me@example.com", &form()).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(outcome.status(), SubmitStatus::Success);
        assert!(outcome.fallback().is_none());
        assert!(outcome.clears_form());

        let calls = relay.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].reply_to, calls[0].from_email);
        assert_eq!(calls[0].to_email, "me@example.com");
        assert_eq!(calls[0].from_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_unconfigured_skips_relay_and_falls_back() {
        let relay = RecordingRelay::default();
        let outcome = submit(&relay, &RelayConfig::Unconfigured, "me@example.com", &form()).await;

        assert!(relay.calls.borrow().is_empty());
        assert_eq!(
            outcome.status(),
            SubmitStatus::Error(UNCONFIGURED_MESSAGE.to_string())
        );
        assert_eq!(
            outcome.fallback(),
            Some(&MailtoLink::new("me@example.com", &form()))
        );
        assert!(!outcome.clears_form());
    }

    #[tokio::test]
    async fn test_relay_failure_uses_provider_message() {
        let relay = RecordingRelay {
            reject_with: Some("The public key is required".to_string()),
            ..Default::default()
        };
        let outcome = submit(&relay, &configured(), "me@example.com", &form()).await;

        assert_eq!(relay.calls.borrow().len(), 1);
        assert_eq!(
            outcome.status().error_message(),
            Some("The public key is required")
        );
        assert!(outcome.fallback().is_some());
    }

    #[tokio::test]
    async fn test_relay_failure_without_text_uses_generic_message() {
        let relay = RecordingRelay {
            reject_with: Some(String::new()),
            ..Default::default()
        };
        let outcome = submit(&relay, &configured(), "me@example.com", &form()).await;
        assert_eq!(outcome.status().error_message(), Some(RELAY_FAILED_MESSAGE));
    }

    #[test]
    fn test_mailto_link() {
        let link = MailtoLink::new("me@example.com", &form());
        assert_eq!(
            link.to_string(),
            "mailto:me@example.com?subject=Let%27s%20talk&body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHello%21%0ASecond%20line"
        );
    }

    #[test]
    fn test_mailto_default_subject() {
        let mut f = form();
        f.subject.clear();
        let link = MailtoLink::new("me@example.com", &f).to_string();
        assert!(link.contains("subject=Portfolio%20Contact&"));
    }

    #[test]
    fn test_begin_is_exclusive() {
        let mut status = SubmitStatus::Error("earlier".to_string());
        assert!(status.begin());
        assert!(status.is_submitting());
        assert!(!status.begin());
        status = SubmitOutcome::Sent.status();
        assert!(!status.is_submitting());
    }

    #[test]
    fn test_resolve_recipient() {
        let mut config = SiteConfig::default();
        assert_eq!(resolve_recipient(None, &config), "");

        config.contact_email = Some("fallback@example.com".to_string());
        assert_eq!(resolve_recipient(None, &config), "fallback@example.com");

        let info: PersonalInfo = serde_json::from_str(
            r#"{"id": 1, "fullName": "Ada", "title": "Engineer", "email": "ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(resolve_recipient(Some(&info), &config), "ada@example.com");
    }
}
