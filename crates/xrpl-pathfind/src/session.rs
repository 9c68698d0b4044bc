//! path-find subscription lifecycle
//!
//! owns at most one live path_find subscription; configure() supersedes the
//! previous one, and streamed frames are matched against the current
//! subscription key so stale replies never overwrite newer state

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use xrpl_types::{Amount, AssetId, PathFindUpdate, PathOption};

use crate::error::LedgerError;
use crate::ledger::{LedgerRequest, LedgerSession};
use crate::rank;

/// search lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFindPhase {
    /// no subscription wanted (no inputs, or zero source amount)
    Idle,
    /// subscription issued, waiting for a full reply
    Searching,
    /// at least one route candidate held
    HasRoute,
}

/// identity of one subscription: account plus both asset identities
///
/// scalar amount changes refresh the request but keep the key, so replies
/// for the same pair are never treated as stale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionKey {
    pub account: String,
    pub from: AssetId,
    pub to: AssetId,
}

struct SessionState {
    key: Option<SubscriptionKey>,
    phase: PathFindPhase,
    alternatives: Vec<PathOption>,
}

/// one path-discovery session against a ledger transport
pub struct PathFindSession<L: LedgerSession> {
    ledger: Arc<L>,
    state: Arc<RwLock<SessionState>>,
}

impl<L: LedgerSession> Clone for PathFindSession<L> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            state: self.state.clone(),
        }
    }
}

impl<L: LedgerSession> PathFindSession<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self {
            ledger,
            state: Arc::new(RwLock::new(SessionState {
                key: None,
                phase: PathFindPhase::Idle,
                alternatives: Vec::new(),
            })),
        }
    }

    /// update desired inputs, superseding any previous subscription
    ///
    /// a zero (or empty) source amount deactivates the session instead; the
    /// write lock is held across the close/create requests so a concurrent
    /// stream frame can never land between supersede and re-subscribe
    pub async fn configure(&self, account: &str, from: &Amount, to: &Amount) {
        let mut state = self.state.write().await;
        state.alternatives.clear();

        if from.is_zero() {
            if state.key.take().is_some() {
                self.close_subscription().await;
            }
            state.phase = PathFindPhase::Idle;
            return;
        }

        let superseded = state.key.is_some();
        state.key = Some(SubscriptionKey {
            account: account.to_string(),
            from: from.asset(),
            to: to.asset(),
        });
        state.phase = PathFindPhase::Searching;

        if superseded {
            self.close_subscription().await;
        }

        debug!("path_find create: {} -> {} for {}", from.asset(), to.asset(), account);
        let request = LedgerRequest::PathFindCreate {
            source_account: account.to_string(),
            destination_account: account.to_string(),
            destination_amount: probe_amount(to),
            send_max: from.clone(),
        };
        if let Err(e) = self.issue(request).await {
            warn!("path_find create failed: {}", e);
        }
    }

    /// ingest one streamed event from the transport
    pub async fn on_stream_update(&self, update: PathFindUpdate) {
        if !update.full_reply {
            debug!("ignoring partial path_find frame");
            return;
        }

        let mut state = self.state.write().await;
        let key = match &state.key {
            Some(key) => key,
            None => {
                debug!("path_find frame with no subscription, dropped");
                return;
            }
        };
        if !update_matches(key, &update) {
            debug!("stale path_find frame from {}, dropped", update.source_account);
            return;
        }

        state.alternatives = update.alternatives;
        state.phase = if state.alternatives.is_empty() {
            PathFindPhase::Searching
        } else {
            PathFindPhase::HasRoute
        };
    }

    /// cheapest route of the current candidate set
    pub async fn best_route(&self) -> Option<PathOption> {
        let state = self.state.read().await;
        if state.phase == PathFindPhase::Idle {
            return None;
        }
        rank::best(&state.alternatives).cloned()
    }

    /// snapshot of the candidates in received order
    pub async fn alternatives(&self) -> Vec<PathOption> {
        self.state.read().await.alternatives.clone()
    }

    pub async fn phase(&self) -> PathFindPhase {
        self.state.read().await.phase
    }

    pub async fn active(&self) -> bool {
        self.state.read().await.phase != PathFindPhase::Idle
    }

    /// close the subscription and release all state; idempotent
    pub async fn teardown(&self) {
        let mut state = self.state.write().await;
        if state.key.take().is_some() {
            self.close_subscription().await;
        }
        state.alternatives.clear();
        state.phase = PathFindPhase::Idle;
    }

    async fn issue(&self, request: LedgerRequest) -> Result<(), LedgerError> {
        self.ledger.connect().await?;
        self.ledger.request(request).await?;
        Ok(())
    }

    /// best-effort close of the live subscription; failures only logged
    async fn close_subscription(&self) {
        if let Err(e) = self.issue(LedgerRequest::PathFindClose).await {
            warn!("path_find close failed: {}", e);
        }
    }
}

/// destination probe: the protocol's "cheapest route for any amount"
/// sentinel (value -1) in the destination asset
fn probe_amount(to: &Amount) -> Value {
    match to.asset() {
        AssetId::Xrp => json!("-1"),
        AssetId::Issued { currency, issuer } => json!({
            "currency": currency,
            "issuer": issuer,
            "value": "-1",
        }),
    }
}

fn update_matches(key: &SubscriptionKey, update: &PathFindUpdate) -> bool {
    if update.source_account != key.account {
        return false;
    }
    match update.destination_asset() {
        Some(asset) => asset == key.to,
        None => false,
    }
}
