use std::net::TcpListener;

use portfolio_contact::configuration::get_configuration;
use portfolio_contact::email_client::EmailClient;
use portfolio_contact::startup::run;
use portfolio_contact::telemetry::{get_tracing_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let subscriber = get_tracing_subscriber("portfolio-contact", "info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
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

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;
    run(listener, email_client)?.await
}
