mod contact_request;
mod submitter_email;
mod submitter_name;

pub use contact_request::{ContactRequest, ContactRequestError};
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
