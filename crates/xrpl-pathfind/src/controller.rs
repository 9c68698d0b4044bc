//! swap controller: the engine surface the presentation layer drives
//!
//! owns the single path-find session, pushes input changes into it, pumps
//! streamed updates from the transport, and executes the swap through the
//! wallet collaborator

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use xrpl_types::{Amount, PathOption};

use crate::config::SwapConfig;
use crate::error::{Result, SwapError};
use crate::ledger::LedgerSession;
use crate::session::PathFindSession;
use crate::swap::{build_payment, SubmitResult, SwapIntent, WalletSession};

struct SwapInputs {
    account: String,
    from: Option<Amount>,
    to: Option<Amount>,
}

pub struct SwapController<L: LedgerSession, W: WalletSession> {
    ledger: Arc<L>,
    wallet: Arc<W>,
    session: PathFindSession<L>,
    config: SwapConfig,
    inputs: Arc<RwLock<SwapInputs>>,
    pump: Mutex<Option<JoinHandle<()>>>,
}

impl<L: LedgerSession, W: WalletSession> SwapController<L, W> {
    pub fn new(ledger: Arc<L>, wallet: Arc<W>, config: SwapConfig) -> Self {
        let account = wallet.account().to_string();
        Self {
            session: PathFindSession::new(ledger.clone()),
            ledger,
            wallet,
            config,
            inputs: Arc::new(RwLock::new(SwapInputs { account, from: None, to: None })),
            pump: Mutex::new(None),
        }
    }

    /// connect, subscribe to the path_find stream, and start pumping updates
    /// into the session
    pub async fn start(&self) -> Result<()> {
        self.ledger.connect().await?;
        let mut rx = self.ledger.subscribe_path_find().await?;
        let session = self.session.clone();
        let handle = tokio::spawn(async move {
            while let Some(update) = rx.recv().await {
                session.on_stream_update(update).await;
            }
            debug!("path_find stream closed");
        });
        *self.pump.lock() = Some(handle);
        Ok(())
    }

    pub async fn set_account(&self, account: &str) {
        self.inputs.write().await.account = account.to_string();
        self.refresh().await;
    }

    pub async fn set_from(&self, amount: Amount) {
        self.inputs.write().await.from = Some(amount);
        self.refresh().await;
    }

    pub async fn set_to(&self, amount: Amount) {
        self.inputs.write().await.to = Some(amount);
        self.refresh().await;
    }

    pub async fn best_route(&self) -> Option<PathOption> {
        self.session.best_route().await
    }

    pub async fn active(&self) -> bool {
        self.session.active().await
    }

    /// build the payment for the current best route and hand it to the
    /// wallet for signing and submission
    pub async fn swap(&self) -> Result<SubmitResult> {
        let route = self.session.best_route().await;

        let (account, intent) = {
            let inputs = self.inputs.read().await;
            let (from, to) = match (&inputs.from, &inputs.to) {
                (Some(from), Some(to)) => (from.clone(), to.clone()),
                _ => return Err(SwapError::NoRoute),
            };
            let intent = SwapIntent {
                from_amount: from,
                to_amount: to,
                slippage: self.config.slippage.clone(),
            };
            (inputs.account.clone(), intent)
        };

        let payment = build_payment(&account, &intent, route.as_ref())?;
        info!("submitting swap payment for {}", account);
        self.wallet.create_payment(payment).await
    }

    /// stop pumping and close the subscription; safe to call twice
    pub async fn shutdown(&self) {
        if let Some(handle) = self.pump.lock().take() {
            handle.abort();
        }
        self.session.teardown().await;
    }

    async fn refresh(&self) {
        let inputs = self.inputs.read().await;
        if let (Some(from), Some(to)) = (&inputs.from, &inputs.to) {
            self.session.configure(&inputs.account, from, to).await;
        }
    }
}

impl<L: LedgerSession, W: WalletSession> Drop for SwapController<L, W> {
    fn drop(&mut self) {
        if let Some(handle) = self.pump.lock().take() {
            handle.abort();
        }
    }
}
