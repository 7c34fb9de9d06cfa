use crate::domain::{SubmitterEmail, SubmitterName};
use crate::routes::ContactFormData;

/// A contact-form submission that has passed validation. Lives for one
/// request; nothing is ever persisted.
pub struct ContactRequest {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactRequestError {
    #[error("Name, email, and message are required fields.")]
    MissingFields,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
}

impl TryFrom<ContactFormData> for ContactRequest {
    type Error = ContactRequestError;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        // Presence first, shape second: an absent or blank email reports the
        // missing-fields outcome, not the invalid-email one.
        let name = SubmitterName::parse(form.name.unwrap_or_default())
            .map_err(|_| ContactRequestError::MissingFields)?;
        let email = form
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or(ContactRequestError::MissingFields)?;
        let message = form
            .message
            .filter(|message| !message.trim().is_empty())
            .ok_or(ContactRequestError::MissingFields)?;

        let email =
            SubmitterEmail::parse(email).map_err(|_| ContactRequestError::InvalidEmail)?;
        let phone = form.phone.filter(|phone| !phone.trim().is_empty());

        Ok(ContactRequest {
            name,
            email,
            phone,
            message,
        })
    }
}
