use std::time::Duration;

use reqwest::{Client, Url};
use tokio::time::Instant;

use crate::routes::ContactResponse;

/// How long a settled outcome stays on display before the form reverts to
/// idle.
const OUTCOME_DISPLAY_DURATION: Duration = Duration::from_secs(5);

const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required fields.";
const CONNECTIVITY_MESSAGE: &str = "Failed to send message. Please try again later.";
const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// The field values a user has typed so far. Phone may stay empty; the
/// server treats a blank phone as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// The display state exposed to the surrounding presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

enum State {
    Idle,
    Submitting,
    Succeeded { shown_at: Instant },
    Failed { shown_at: Instant, message: String },
}

/// Holds contact-form state on the client side: the field values, the
/// submission endpoint, and the current display state.
pub struct ContactForm {
    endpoint: Url,
    http_client: Client,
    fields: FormFields,
    state: State,
}

impl ContactForm {
    pub fn new(endpoint: String) -> Self {
        let endpoint = Url::parse(&endpoint).expect("Failed to parse the submission endpoint");
        Self {
            endpoint,
            http_client: Client::new(),
            fields: FormFields::default(),
            state: State::Idle,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access to the field values, as text inputs would have.
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// The state the presentation layer should render right now. A settled
    /// outcome reverts to idle once its display window has passed.
    pub fn status(&self) -> SubmissionStatus {
        match &self.state {
            State::Idle => SubmissionStatus::Idle,
            State::Submitting => SubmissionStatus::Submitting,
            State::Succeeded { shown_at } => {
                if shown_at.elapsed() >= OUTCOME_DISPLAY_DURATION {
                    SubmissionStatus::Idle
                } else {
                    SubmissionStatus::Succeeded
                }
            }
            State::Failed { shown_at, message } => {
                if shown_at.elapsed() >= OUTCOME_DISPLAY_DURATION {
                    SubmissionStatus::Idle
                } else {
                    SubmissionStatus::Failed {
                        message: message.clone(),
                    }
                }
            }
        }
    }

    /// Submits the current field values and returns the resulting status.
    ///
    /// Holding `&mut self` for the whole call keeps a second submission from
    /// starting while one is in flight. On success the fields are cleared;
    /// on failure they are left untouched so the user can correct and
    /// resubmit. There is no automatic retry.
    pub async fn submit(&mut self) -> SubmissionStatus {
        // Duplicates the `required` markers on the rendered form. Usability
        // only; the server remains the authoritative validator.
        if self.missing_required_field() {
            self.state = State::Failed {
                shown_at: Instant::now(),
                message: REQUIRED_FIELDS_MESSAGE.to_string(),
            };
            return self.status();
        }

        self.state = State::Submitting;
        self.state = match self.post_fields().await {
            Ok(response) if response.status().is_success() => {
                self.fields = FormFields::default();
                State::Succeeded {
                    shown_at: Instant::now(),
                }
            }
            Ok(response) => State::Failed {
                shown_at: Instant::now(),
                message: error_message_from(response).await,
            },
            // No response at all: a connectivity problem, recovered locally.
            Err(_) => State::Failed {
                shown_at: Instant::now(),
                message: CONNECTIVITY_MESSAGE.to_string(),
            },
        };
        self.status()
    }

    fn missing_required_field(&self) -> bool {
        [&self.fields.name, &self.fields.email, &self.fields.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    async fn post_fields(&self) -> Result<reqwest::Response, reqwest::Error> {
        self.http_client
            .post(self.endpoint.clone())
            .json(&self.fields)
            .send()
            .await
    }
}

/// Prefers the server's own message when the error response carries one.
async fn error_message_from(response: reqwest::Response) -> String {
    response
        .json::<ContactResponse>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
