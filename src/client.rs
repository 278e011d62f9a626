use crate::client_info;
use crate::constants::{
    CHAIN_PATH, MAJORITY_RESOLVE_PATH, MINE_PATH, NEW_TRANSACTION_PATH, PEERS_PATH,
    REGISTER_NODES_PATH, RESOLVE_PATH,
};
use crate::error::PollerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeersResponse {
    pub nodes: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTransactionRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Vec<String>,
}

/// The two node calls a poll cycle is made of.
pub trait NodeApi: Send + Sync {
    /// Peer list known by `node`, in the order the node reports it
    fn fetch_peers(&self, node: &str) -> impl Future<Output = Result<Vec<String>, PollerError>> + Send;

    /// Asks `peer` to run majority resolution and returns its raw answer
    fn resolve_majority(&self, peer: &str) -> impl Future<Output = Result<Value, PollerError>> + Send;
}

/// Joins a node address and an API path, adding the http scheme to bare
/// `host:port` addresses.
pub fn endpoint(node: &str, path: &str) -> Result<String, PollerError> {
    let node = node.trim().trim_end_matches('/');
    if node.is_empty() {
        return Err(PollerError::Url("empty node address".to_string()));
    }
    if node.starts_with("http://") || node.starts_with("https://") {
        Ok(format!("{}{}", node, path))
    } else {
        Ok(format!("http://{}{}", node, path))
    }
}

/// Splits a comma separated list of node addresses, dropping blanks.
pub fn parse_node_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|node| !node.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Clone)]
pub struct HttpNodeClient {
    http: reqwest::Client,
}

impl HttpNodeClient {
    pub fn new(request_timeout: Duration) -> Result<Self, PollerError> {
        let http = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http })
    }

    async fn get_json(&self, url: &str) -> Result<Value, PollerError> {
        let response = self.http.get(url).send().await?;
        Self::read_json(url, response).await
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<Value, PollerError> {
        let response = self.http.post(url).json(body).send().await?;
        Self::read_json(url, response).await
    }

    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, PollerError> {
        let status = response.status();
        if !status.is_success() {
            return Err(PollerError::Status {
                url: url.to_string(),
                status: status.to_string(),
            });
        }
        Ok(response.json::<Value>().await?)
    }

    pub async fn mine(&self, node: &str) -> Result<Value, PollerError> {
        let url = endpoint(node, MINE_PATH)?;
        client_info!("Mining a new block on {}", node);
        self.get_json(&url).await
    }

    pub async fn new_transaction(
        &self,
        node: &str,
        request: &NewTransactionRequest,
    ) -> Result<Value, PollerError> {
        let url = endpoint(node, NEW_TRANSACTION_PATH)?;
        client_info!(
            "Submitting transaction from {} to {} on {}",
            request.sender,
            request.recipient,
            node
        );
        self.post_json(&url, request).await
    }

    pub async fn chain(&self, node: &str) -> Result<Value, PollerError> {
        let url = endpoint(node, CHAIN_PATH)?;
        self.get_json(&url).await
    }

    pub async fn register_nodes(&self, node: &str, nodes: Vec<String>) -> Result<Value, PollerError> {
        let url = endpoint(node, REGISTER_NODES_PATH)?;
        client_info!("Registering {} nodes on {}", nodes.len(), node);
        self.post_json(&url, &RegisterNodesRequest { nodes }).await
    }

    pub async fn resolve(&self, node: &str) -> Result<Value, PollerError> {
        let url = endpoint(node, RESOLVE_PATH)?;
        self.get_json(&url).await
    }
}

impl NodeApi for HttpNodeClient {
    async fn fetch_peers(&self, node: &str) -> Result<Vec<String>, PollerError> {
        let url = endpoint(node, PEERS_PATH)?;
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PollerError::Discovery {
                status: status.to_string(),
            });
        }
        let peers = response.json::<PeersResponse>().await?;
        Ok(peers.nodes)
    }

    async fn resolve_majority(&self, peer: &str) -> Result<Value, PollerError> {
        let url = endpoint(peer, MAJORITY_RESOLVE_PATH)?;
        self.get_json(&url).await.map_err(|err| PollerError::PeerPoll {
            peer: peer.to_string(),
            reason: err.to_string(),
        })
    }
}
