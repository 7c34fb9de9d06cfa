use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::SubmitterEmail;

pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. `development` and `production` are acceptable.",
                other
            )),
        }
    }
}

#[derive(serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// The From address, which the provider allows to carry a display name,
    /// e.g. `Portfolio Contact <no-reply@example.com>`.
    pub sender: String,
    /// The address that receives every contact notification.
    pub recipient: String,
    pub authorization_token: Secret<String>,
}

impl EmailClientSettings {
    pub fn recipient(&self) -> Result<SubmitterEmail, String> {
        SubmitterEmail::parse(self.recipient.clone())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .expect("Failed to parse RUST_ENV");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN=...` supplies the provider
        // credential without writing it to disk.
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
