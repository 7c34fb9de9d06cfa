use std::net::TcpListener;

use once_cell::sync::Lazy;
use portfolio_contact::configuration::get_configuration;
use portfolio_contact::email_client::EmailClient;
use portfolio_contact::telemetry::{get_tracing_subscriber, init_subscriber};
use wiremock::MockServer;

// ensure that the tracing stack is only initialized once
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_tracing_subscriber("test", "debug", std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_tracing_subscriber("test", "debug", std::io::sink);
        init_subscriber(subscriber);
    }
});

// A struct holding data needed to access a test version of our application
pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

// Spawns an app inside a future and returns the configured TestApp.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // stands in for the email-delivery provider
    let email_server = MockServer::start().await;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = {
        let mut configuration = get_configuration().expect("Failed to read configuration.");
        configuration.email_client.base_url = email_server.uri();
        configuration
    };
    let recipient = configuration
        .email_client
        .recipient()
        .expect("Invalid recipient email address.");
    let email_client = EmailClient::new(
        configuration.email_client.base_url,
        configuration.email_client.sender,
        recipient,
        configuration.email_client.authorization_token,
    );

    let server =
        portfolio_contact::startup::run(listener, email_client).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        email_server,
    }
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Posts a raw body with a JSON content type, for exercising bodies that
    /// are not valid JSON at all.
    pub async fn post_contact_raw(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
