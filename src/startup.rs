use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::email_client::EmailClient;
use crate::routes::{health_check, submit_contact, ContactResponse};

pub fn run(listener: TcpListener, email_client: EmailClient) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(submit_contact))
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Bodies that fail JSON extraction never reach the handler; this maps the
/// rejection to the same JSON shape the handler's own errors use.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| {
        let response = HttpResponse::BadRequest().json(ContactResponse {
            message: "The request body could not be parsed. Please check your input and try again."
                .to_string(),
            id: None,
        });
        InternalError::from_response(error, response).into()
    })
}
