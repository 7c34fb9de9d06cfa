use std::fmt::{Debug, Formatter};

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::{ContactRequest, ContactRequestError};
use crate::email_client::EmailClient;
use crate::error_handling::error_chain_fmt;

/// The raw submission body. Every field is optional at this layer so that
/// absent and present-but-blank fields take the same validation path.
#[derive(serde::Deserialize)]
pub struct ContactFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ContactResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ContactRequestError),
    #[error("Failed to send email. Please try again later.")]
    DeliveryError(#[source] reqwest::Error),
    #[error("An unexpected error occurred. Please try again.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DeliveryError(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // The Display message is all a caller ever sees; the source chain, with
    // any provider detail, stays in the logs.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ContactResponse {
            message: self.to_string(),
            id: None,
        })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, email_client),
    fields(
        submitter_name = tracing::field::Empty,
        submitter_email = tracing::field::Empty
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactFormData>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let request = ContactRequest::try_from(form.0)?;
    let span = tracing::Span::current();
    span.record("submitter_name", &tracing::field::display(request.name.as_ref()));
    span.record("submitter_email", &tracing::field::display(request.email.as_ref()));

    let message_id = send_notification_email(&email_client, &request)
        .await
        .map_err(ContactError::DeliveryError)?;

    Ok(HttpResponse::Ok().json(ContactResponse {
        message: "Email sent successfully!".to_string(),
        id: message_id,
    }))
}

/// Formats the notification and dispatches it through the delivery client.
/// Exactly one email per validated submission.
#[tracing::instrument(name = "Sending a contact notification email", skip(email_client, request))]
async fn send_notification_email(
    email_client: &EmailClient,
    request: &ContactRequest,
) -> Result<Option<String>, reqwest::Error> {
    let name = request.name.as_ref();
    let email = request.email.as_ref();
    let subject = format!("New Contact Form Message from {}", name);

    let phone_html = match request.phone.as_deref() {
        Some(phone) => format!(
            "<p><strong>Phone:</strong> <a href=\"tel:{}\">{}</a></p>",
            phone, phone
        ),
        None => String::new(),
    };
    let html_content = format!(
        "<h2>New Contact Form Submission</h2>\
        <p><strong>Name:</strong> {}</p>\
        <p><strong>Email:</strong> <a href=\"mailto:{}\">{}</a></p>\
        {}\
        <p><strong>Message:</strong></p>\
        <p>{}</p>\
        <p>You can reply directly to this email to respond to {}.</p>",
        name, email, email, phone_html, request.message, name
    );

    let phone_text = match request.phone.as_deref() {
        Some(phone) => format!("Phone: {}\n", phone),
        None => String::new(),
    };
    let text_content = format!(
        "New contact form submission\n\nName: {}\nEmail: {}\n{}\nMessage:\n{}\n",
        name, email, phone_text, request.message
    );

    email_client
        .send_email(&request.email, &subject, &html_content, &text_content)
        .await
}
