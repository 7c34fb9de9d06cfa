use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: one `@` separating non-whitespace local and domain
// parts, with at least one dot in the domain. Consecutive dots pass.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile the email shape regex")
});

#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    /// Returns an instance of `SubmitterEmail` if the input has the shape of
    /// an email address, `local@domain.tld`, and an error otherwise.
    pub fn parse(email: String) -> Result<SubmitterEmail, String> {
        if EMAIL_SHAPE.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid email address.", email))
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
