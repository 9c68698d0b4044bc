//! ledger transport interface
//!
//! the engine never owns a connection; implementations wrap a websocket (or
//! any transport exposing request/response plus the path_find event stream)

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use xrpl_types::{Amount, PathFindUpdate};

use crate::error::LedgerError;

/// a path_find command sent over the transport
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRequest {
    /// open (or replace) the path-find subscription
    PathFindCreate {
        source_account: String,
        destination_account: String,
        destination_amount: Value,
        send_max: Amount,
    },
    /// close the current path-find subscription
    PathFindClose,
}

impl LedgerRequest {
    /// wire payload for the transport
    pub fn to_json(&self) -> Value {
        match self {
            LedgerRequest::PathFindCreate {
                source_account,
                destination_account,
                destination_amount,
                send_max,
            } => json!({
                "command": "path_find",
                "subcommand": "create",
                "source_account": source_account,
                "destination_account": destination_account,
                "destination_amount": destination_amount,
                "send_max": send_max,
            }),
            LedgerRequest::PathFindClose => json!({
                "command": "path_find",
                "subcommand": "close",
            }),
        }
    }
}

/// connection to the ledger: request/response plus the server-pushed
/// path_find stream
#[async_trait]
pub trait LedgerSession: Send + Sync + 'static {
    /// establish the connection; idempotent, safe to call before every request
    async fn connect(&self) -> Result<(), LedgerError>;

    /// send one request and await its response
    async fn request(&self, request: LedgerRequest) -> Result<Value, LedgerError>;

    /// subscribe to streamed path_find events
    async fn subscribe_path_find(&self) -> Result<mpsc::Receiver<PathFindUpdate>, LedgerError>;
}
