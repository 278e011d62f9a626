use crate::poller::Trigger;
use crate::server::ServerHandler;
use crate::{server_error, server_info};
use actix_web::{get, post, web, HttpResponse, Responder};
use std::sync::Arc;

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK!")
}

/// Last rendered result of the poller
#[get("/result")]
pub async fn show_result(handler: web::Data<Arc<ServerHandler>>) -> impl Responder {
    match handler.board.current() {
        Some(text) => HttpResponse::Ok().content_type("text/plain").body(text),
        None => HttpResponse::NoContent().finish(),
    }
}

#[post("/poll")]
pub async fn request_poll(handler: web::Data<Arc<ServerHandler>>) -> impl Responder {
    handler.request_cycle(Trigger::Manual);
    HttpResponse::Accepted().body("Poll cycle queued")
}

// Mines on the selected node, then refreshes the result whatever the mine outcome was
#[post("/mine")]
pub async fn mine(handler: web::Data<Arc<ServerHandler>>) -> impl Responder {
    let result = handler.client.mine(&handler.node).await;
    handler.request_cycle(Trigger::AfterMine);

    match result {
        Ok(body) => {
            server_info!("New block mined on {}", handler.node);
            HttpResponse::Ok().json(body)
        }
        Err(err) => {
            server_error!("Mining on {} failed: {}", handler.node, err);
            HttpResponse::BadGateway().body(err.to_string())
        }
    }
}
