use crate::client::HttpNodeClient;
use crate::display::ResultBoard;
use crate::handler::{health_check, mine, request_poll, show_result};
use crate::poller::Trigger;
use crate::{server_error, server_info};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

// State shared by every dashboard handler
pub struct ServerHandler {
    pub board: ResultBoard,
    pub client: HttpNodeClient,
    pub node: String,
    pub triggers: Sender<Trigger>,
}

impl ServerHandler {
    pub fn new(
        board: ResultBoard,
        client: HttpNodeClient,
        node: String,
        triggers: Sender<Trigger>,
    ) -> Self {
        Self {
            board,
            client,
            node,
            triggers,
        }
    }

    /// Queues a poll cycle, a full queue means one is already coming
    pub fn request_cycle(&self, trigger: Trigger) {
        if let Err(err) = self.triggers.try_send(trigger) {
            server_error!("Could not queue poll cycle: {}", err);
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(show_result)
        .service(request_poll)
        .service(mine);
}

pub async fn run_http_server(handler: Arc<ServerHandler>, http_address: String) -> std::io::Result<()> {
    server_info!("Dashboard listening on {}", http_address);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(handler.clone()))
            .configure(configure)
    })
    .bind(http_address)?
    .run()
    .await
}
