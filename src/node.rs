use crate::client::HttpNodeClient;
use crate::config::Config;
use crate::constants::TRIGGER_CHANNEL_CAPACITY;
use crate::display::ResultBoard;
use crate::error::PollerError;
use crate::poller::{Poller, Trigger};
use crate::server::{run_http_server, ServerHandler};
use crate::{poller_error, poller_info, server_error};
use std::sync::Arc;
use tokio::sync::mpsc::channel;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Watches the selected node: keeps the poller loop alive and, when
/// configured, the dashboard next to it.
pub struct Node {
    pub config: Config,
    pub board: ResultBoard,
}

impl Node {
    pub fn new(config: Config) -> Self {
        Node {
            config,
            board: ResultBoard::new(),
        }
    }

    pub async fn start(&self) -> Result<(), PollerError> {
        let client = HttpNodeClient::new(Duration::from_secs(self.config.request_timeout_secs))?;
        let (trigger_tx, trigger_rx) = channel::<Trigger>(TRIGGER_CHANNEL_CAPACITY);

        let poller = Arc::new(Poller::new(
            Arc::new(client.clone()),
            self.board.clone(),
            self.config.marker_phrase.clone(),
        ));
        let node_url = self.config.node_url.clone();
        let period = Duration::from_secs(self.config.poll_interval_secs.max(1));

        poller_info!(
            "Watching {} every {} seconds",
            node_url,
            period.as_secs()
        );
        let poller_handle = tokio::spawn(poller.run(node_url.clone(), period, trigger_rx));

        match self.config.http_address.clone() {
            Some(http_address) => {
                let handler = Arc::new(ServerHandler::new(
                    self.board.clone(),
                    client,
                    node_url,
                    trigger_tx,
                ));
                let served = run_http_server(handler, http_address).await;
                poller_handle.abort();
                if let Err(err) = &served {
                    server_error!("Dashboard stopped: {}", err);
                }
                served?;
            }
            None => {
                // Nothing else to feed the poller, the sender just has to stay alive
                let _keep_alive = trigger_tx;
                join_poller(poller_handle).await?;
            }
        }

        Ok(())
    }
}

/// Waits for the poller loop, which only ever stops by panicking or being cancelled.
pub async fn join_poller(handle: JoinHandle<()>) -> Result<(), PollerError> {
    handle.await.map_err(|err| {
        poller_error!("Poller task stopped: {}", err);
        PollerError::from(err)
    })
}
