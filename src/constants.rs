pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// Phrase a peer puts in its resolution message when it swapped its chain
pub const DEFAULT_MARKER_PHRASE: &str = "chain replaced by the longer valid chain";

pub const RESULT_HEADER: &str = "Result after conflict resolution:";
pub const NO_PEER_RESPONDED: &str = "No peer responded";

pub const TRIGGER_CHANNEL_CAPACITY: usize = 8;

pub const PEERS_PATH: &str = "/nodes/all";
pub const MAJORITY_RESOLVE_PATH: &str = "/nodes/resolve/majority";
pub const RESOLVE_PATH: &str = "/nodes/resolve";
pub const MINE_PATH: &str = "/mine";
pub const CHAIN_PATH: &str = "/chain";
pub const NEW_TRANSACTION_PATH: &str = "/transactions/new";
pub const REGISTER_NODES_PATH: &str = "/nodes/register";
