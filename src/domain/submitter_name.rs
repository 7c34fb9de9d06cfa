#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns an instance of `SubmitterName` if the input is non-empty after
    /// trimming, and an error otherwise. No other restriction applies; people
    /// write their names in many shapes.
    pub fn parse(name: String) -> Result<SubmitterName, String> {
        if name.trim().is_empty() {
            return Err("A submitter name cannot be empty.".to_string());
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
