use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::SubmitterEmail;

/// Client for the transactional-email provider. One instance is built at
/// startup and shared across requests; the recipient is fixed by
/// configuration, while the reply-to varies per submission.
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: String,
    recipient: SubmitterEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        recipient: SubmitterEmail,
        authorization_token: Secret<String>,
    ) -> Self {
        // Take a string, parse as a Url. From this point forward we know
        // base_url is valid.
        let base_url = Url::parse(&base_url).expect("Failed to parse base_url");

        Self {
            http_client: Client::new(),
            base_url,
            sender,
            recipient,
            authorization_token,
        }
    }

    /// Sends one notification email to the configured recipient, with replies
    /// directed at `reply_to`. Returns the provider's message identifier when
    /// it supplies one.
    pub async fn send_email(
        &self,
        reply_to: &SubmitterEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let url = self
            .base_url
            .join("/emails")
            .expect("Failed to join /emails with base url");

        let request_body = SendEmailRequest {
            from: &self.sender,
            to: [self.recipient.as_ref()],
            reply_to: reply_to.as_ref(),
            subject,
            html: html_content,
            text: text_content,
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body) // also sets the content-type header
            .send()
            .await?
            .error_for_status()?;
        /* `send` only fails on transport-level problems; provider rejections
        arrive as HTTP error statuses, hence the explicit `error_for_status`. */

        // The message id is traceability metadata only, so a success body we
        // cannot decode is not a delivery failure.
        let body = response
            .json::<SendEmailResponse>()
            .await
            .unwrap_or_default();
        Ok(body.id)
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Default, serde::Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}
