use crate::aggregator::Aggregator;
use crate::client::NodeApi;
use crate::display::ResultBoard;
use crate::error::PollerError;
use crate::outcome::{render, ResolutionOutcome};
use crate::{poller_error, poller_info, poller_warn};
use std::sync::Arc;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::sync::Mutex;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Why a cycle was requested outside of the timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Manual,
    AfterMine,
}

#[derive(Clone, Debug)]
pub struct CycleReport {
    pub discovered: usize,
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
    pub outcome: Option<ResolutionOutcome>,
    pub rendered: String,
}

#[derive(Clone, Debug)]
pub enum CycleStatus {
    Completed(CycleReport),
    // Another cycle held the in-flight guard
    Skipped,
}

pub struct Poller<C: NodeApi> {
    client: Arc<C>,
    board: ResultBoard,
    marker_phrase: String,
    in_flight: Mutex<()>,
}

impl<C: NodeApi + 'static> Poller<C> {
    pub fn new(client: Arc<C>, board: ResultBoard, marker_phrase: String) -> Self {
        Self {
            client,
            board,
            marker_phrase,
            in_flight: Mutex::new(()),
        }
    }

    /// Runs one discovery + resolution cycle against `node`, unless a cycle
    /// is already running, in which case this one is dropped.
    pub async fn run_cycle(&self, node: &str) -> Result<CycleStatus, PollerError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            poller_info!("A poll cycle is already running, skipping this one");
            return Ok(CycleStatus::Skipped);
        };

        let peers = self.client.fetch_peers(node).await.map_err(|err| match err {
            PollerError::Discovery { .. } => err,
            other => PollerError::Discovery {
                status: other.to_string(),
            },
        })?;
        poller_info!("Discovered {} peers from {}", peers.len(), node);

        let report = self.poll_peers(peers).await;
        poller_info!(
            "Cycle finished: {} of {} peers answered, {} skipped",
            report.succeeded.len(),
            report.discovered,
            report.failed.len()
        );
        if let Some(outcome) = &report.outcome {
            poller_info!("Showing the outcome of peer {}", outcome.peer);
        }
        self.board.show(report.rendered.clone());
        Ok(CycleStatus::Completed(report))
    }

    // Peers are contacted one after the other, a failing peer is only skipped
    async fn poll_peers(&self, peers: Vec<String>) -> CycleReport {
        let discovered = peers.len();
        let mut aggregator = Aggregator::new();
        let mut succeeded = vec![];
        let mut failed = vec![];

        for peer in peers {
            match self.client.resolve_majority(&peer).await {
                Ok(body) => {
                    let outcome = ResolutionOutcome::new(peer.clone(), body, &self.marker_phrase);
                    if outcome.replaced {
                        poller_info!("Peer {} replaced its chain", peer);
                    }
                    aggregator.observe(outcome);
                    succeeded.push(peer);
                }
                Err(err) => {
                    poller_warn!("Skipping peer {}: {}", peer, err);
                    failed.push(peer);
                }
            }
        }

        let outcome = aggregator.finish();
        let rendered = render(outcome.as_ref());
        CycleReport {
            discovered,
            succeeded,
            failed,
            outcome,
            rendered,
        }
    }

    /// Polls right away, then on every tick of `period` and on every trigger.
    /// Each cycle runs on its own task so a slow peer never delays the timer.
    pub async fn run(self: Arc<Self>, node: String, period: Duration, mut triggers: Receiver<Trigger>) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            select! {
                _ = ticker.tick() => {}
                Some(trigger) = triggers.recv() => {
                    poller_info!("Poll cycle requested: {:?}", trigger);
                }
            }

            let poller = self.clone();
            let node = node.clone();
            tokio::spawn(async move {
                if let Err(err) = poller.run_cycle(&node).await {
                    poller_error!("{}", err);
                }
            });
        }
    }
}
