use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use crate::configuration::Settings;
use crate::mailing_list_client::MailingListClient;
use crate::routes::{health_check, index, subscribe};
use crate::submitter::SubscriptionSubmitter;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let endpoint = configuration.mailing_list.endpoint()
            .map_err(anyhow::Error::msg)?;
        let mailing_list_client = MailingListClient::new(
            endpoint,
            configuration.mailing_list.api_key,
        );
        let submitter = SubscriptionSubmitter::new(mailing_list_client);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, submitter)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    tcp_listener: TcpListener,
    submitter: SubscriptionSubmitter,
) -> Result<Server, std::io::Error> {
    let submitter = web::Data::new(submitter);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::post().to(subscribe))
            .app_data(submitter.clone())
    })
        .listen(tcp_listener)?
        .run();

    Ok(server)
}
