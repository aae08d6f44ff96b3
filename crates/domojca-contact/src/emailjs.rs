//! EmailJS delivery backend.

use std::time::Duration;

use async_trait::async_trait;
use domojca_core::config::{self, ContactConfig};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::delivery::DeliveryClient;
use crate::error::DeliveryError;
use crate::types::ContactSubmission;

/// Sends contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    config::non_blank(value).map(str::to_string)
}

impl EmailJsClient {
    pub fn new(config: &ContactConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            service_id: non_blank(&config.service_id),
            template_id: non_blank(&config.template_id),
            public_key: non_blank(&config.public_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Whether all three identifiers are present.
    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    fn credentials(&self) -> Result<(&str, &str, &str), DeliveryError> {
        let service_id = self
            .service_id
            .as_deref()
            .ok_or(DeliveryError::MissingConfig("service_id"))?;
        let template_id = self
            .template_id
            .as_deref()
            .ok_or(DeliveryError::MissingConfig("template_id"))?;
        let public_key = self
            .public_key
            .as_deref()
            .ok_or(DeliveryError::MissingConfig("public_key"))?;
        Ok((service_id, template_id, public_key))
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1.0/email/send", self.base_url)
    }
}

#[async_trait]
impl DeliveryClient for EmailJsClient {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        let (service_id, template_id, user_id) = self.credentials().inspect_err(|e| {
            error!(error = %e, "EmailJS is not configured");
        })?;

        let body = SendRequest {
            service_id,
            template_id,
            user_id,
            template_params: TemplateParams {
                from_name: &submission.name,
                reply_to: &submission.email,
                message: &submission.message,
            },
        };

        debug!(endpoint = %self.endpoint(), "Sending contact message");
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "EmailJS rejected the message");
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Contact message delivered");
        Ok(())
    }
}
