use serde::Serialize;
use thiserror::Error;

use crate::{config::RelayConfig, cooldown::ContactForm};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail relay credentials are not configured")]
    NotConfigured,
    #[error("could not encode relay request: {0}")]
    Encode(String),
    #[error("mail relay unreachable: {0}")]
    Transport(String),
    #[error("mail relay rejected the message with status {status}")]
    Rejected { status: u16 },
}

impl RelayError {
    pub fn class(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Encode(_) => "encode",
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn build(config: &RelayConfig, form: &ContactForm) -> Result<Self, RelayError> {
        let (Some(service_id), Some(template_id), Some(public_key)) = (
            config.service_id.as_ref(),
            config.template_id.as_ref(),
            config.public_key.as_ref(),
        ) else {
            return Err(RelayError::NotConfigured);
        };

        Ok(Self {
            service_id: service_id.clone(),
            template_id: template_id.clone(),
            user_id: public_key.clone(),
            template_params: TemplateParams {
                user_name: form.name.trim().to_string(),
                user_email: form.email.trim().to_string(),
                message: form.message.trim().to_string(),
            },
        })
    }
}

/// Any 2xx is a delivery; everything else is a rejection.
pub fn classify_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected { status })
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn send(config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
    use gloo_net::http::Request;

    let payload = RelayRequest::build(config, form)?;
    let request = Request::post(EMAILJS_SEND_URL)
        .json(&payload)
        .map_err(|error| RelayError::Encode(error.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|error| RelayError::Transport(error.to_string()))?;

    classify_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("public-key".to_string()),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi!\n".to_string(),
        }
    }

    #[test]
    fn request_uses_emailjs_field_names() {
        let request = RelayRequest::build(&configured(), &form()).expect("configured relay");
        let body = serde_json::to_value(&request).expect("serializable request");

        assert_eq!(body["service_id"], "service_abc");
        assert_eq!(body["template_id"], "template_xyz");
        assert_eq!(body["user_id"], "public-key");
        assert_eq!(body["template_params"]["user_name"], "Ada");
        assert_eq!(body["template_params"]["user_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hi!");
    }

    #[test]
    fn missing_credentials_fail_before_any_request() {
        let mut config = configured();
        config.template_id = None;

        let error = RelayRequest::build(&config, &form()).expect_err("template id is required");
        assert!(matches!(error, RelayError::NotConfigured));
        assert_eq!(error.class(), "not_configured");
    }

    #[test]
    fn only_success_statuses_count_as_delivered() {
        assert!(classify_status(200).is_ok());
        assert!(classify_status(204).is_ok());
        assert!(matches!(classify_status(400), Err(RelayError::Rejected { status: 400 })));
        assert!(matches!(classify_status(503), Err(RelayError::Rejected { status: 503 })));
        assert!(classify_status(302).is_err());
    }
}
