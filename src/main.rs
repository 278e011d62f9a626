#[macro_use]
extern crate log;

mod aggregator;
mod client;
mod config;
mod constants;
mod display;
mod error;
mod handler;
mod logger;
mod node;
mod outcome;
mod poller;
mod server;

use crate::client::{parse_node_list, HttpNodeClient, NewTransactionRequest, NodeApi};
use crate::config::{load_config, Config};
use crate::display::ResultBoard;
use crate::error::PollerError;
use crate::logger::init_logger;
use crate::node::Node;
use crate::poller::{CycleStatus, Poller};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Struct to define CLI arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of a YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Node to talk to (e.g., http://127.0.0.1:5000), overrides the configuration file
    #[arg(short, long)]
    node: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the peers of the node forever and keep the latest result on display
    Watch {
        /// The hostname and port of the dashboard (e.g., 127.0.0.1:8080)
        #[arg(short, long)]
        rpc_bind: Option<String>,

        /// Seconds between two poll cycles
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Run a single poll cycle and print the result
    Poll,
    /// Mine a block, then refresh the conflict resolution result
    Mine,
    /// Print the full chain of the node
    Chain,
    /// Run the node's own conflict resolution
    Resolve,
    /// List the peers known by the node
    Nodes,
    /// Submit a new transaction
    Transaction {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        amount: String,
    },
    /// Register peers on the node, as a comma separated list
    Register {
        #[arg(long)]
        nodes: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if let Some(node) = args.node {
        config.node_url = node;
    }

    match run(config, args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(mut config: Config, command: Command) -> Result<(), PollerError> {
    let client = HttpNodeClient::new(Duration::from_secs(config.request_timeout_secs))?;
    let node = config.node_url.clone();

    match command {
        Command::Watch { rpc_bind, interval } => {
            if rpc_bind.is_some() {
                config.http_address = rpc_bind;
            }
            if let Some(interval) = interval {
                config.poll_interval_secs = interval;
            }
            Node::new(config).start().await
        }
        Command::Poll => poll_once(client, &config).await,
        Command::Mine => {
            // The result is refreshed whether mining worked or not
            let mined = client.mine(&node).await;
            if let Ok(body) = &mined {
                print_json(body);
            }
            let polled = poll_once(client, &config).await;
            settle_mine(mined, polled)
        }
        Command::Chain => client.chain(&node).await.map(|body| print_json(&body)),
        Command::Resolve => client.resolve(&node).await.map(|body| print_json(&body)),
        Command::Nodes => {
            for peer in client.fetch_peers(&node).await? {
                println!("{}", peer);
            }
            Ok(())
        }
        Command::Transaction {
            sender,
            recipient,
            amount,
        } => {
            let request = NewTransactionRequest {
                sender,
                recipient,
                amount,
            };
            client
                .new_transaction(&node, &request)
                .await
                .map(|body| print_json(&body))
        }
        Command::Register { nodes } => client
            .register_nodes(&node, parse_node_list(&nodes))
            .await
            .map(|body| print_json(&body)),
    }
}

async fn poll_once(client: HttpNodeClient, config: &Config) -> Result<(), PollerError> {
    let poller = Poller::new(
        Arc::new(client),
        ResultBoard::new(),
        config.marker_phrase.clone(),
    );
    if let CycleStatus::Completed(report) = poller.run_cycle(&config.node_url).await? {
        println!("{}", report.rendered);
    }
    Ok(())
}

// A failed mine is the error reported, a failed refresh after it is only logged
fn settle_mine(
    mined: Result<Value, PollerError>,
    polled: Result<(), PollerError>,
) -> Result<(), PollerError> {
    match (mined, polled) {
        (Err(mine_err), Err(poll_err)) => {
            error!("Refreshing the result after mining failed: {}", poll_err);
            Err(mine_err)
        }
        (mined, polled) => {
            mined?;
            polled
        }
    }
}

fn print_json(body: &Value) {
    match serde_json::to_string_pretty(body) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", body),
    }
}
