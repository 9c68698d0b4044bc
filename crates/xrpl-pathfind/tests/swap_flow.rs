//! end-to-end engine flow against an in-memory ledger and wallet

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use xrpl_pathfind::{
    LedgerError, LedgerRequest, LedgerSession, SubmitResult, SwapConfig, SwapController,
    SwapError, WalletSession,
};
use xrpl_types::{Amount, PathFindUpdate, PaymentInstruction};

const ACCOUNT: &str = "rAliceXs1yLEn4dQV58BTsmvUDDB2YJS8q";
const GATEWAY: &str = "rGatewayh9F1nEAjnrUC2dqAzQccvW6oS3";

struct ScriptedLedger {
    requests: Mutex<Vec<Value>>,
    stream_tx: Mutex<Option<mpsc::Sender<PathFindUpdate>>>,
}

impl ScriptedLedger {
    fn new() -> Self {
        Self { requests: Mutex::new(Vec::new()), stream_tx: Mutex::new(None) }
    }

    fn sender(&self) -> mpsc::Sender<PathFindUpdate> {
        self.stream_tx.lock().clone().expect("subscribe_path_find not called")
    }

    fn recorded(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl LedgerSession for ScriptedLedger {
    async fn connect(&self) -> Result<(), LedgerError> {
        Ok(())
    }

    async fn request(&self, request: LedgerRequest) -> Result<Value, LedgerError> {
        self.requests.lock().push(request.to_json());
        Ok(json!({}))
    }

    async fn subscribe_path_find(&self) -> Result<mpsc::Receiver<PathFindUpdate>, LedgerError> {
        let (tx, rx) = mpsc::channel(8);
        *self.stream_tx.lock() = Some(tx);
        Ok(rx)
    }
}

struct TestWallet {
    payments: Mutex<Vec<PaymentInstruction>>,
}

impl TestWallet {
    fn new() -> Self {
        Self { payments: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl WalletSession for TestWallet {
    fn account(&self) -> &str {
        ACCOUNT
    }

    async fn create_payment(
        &self,
        payment: PaymentInstruction,
    ) -> Result<SubmitResult, SwapError> {
        self.payments.lock().push(payment);
        Ok(SubmitResult { id: "payload-1".into(), accepted: true })
    }
}

fn usd_full_reply(values: &[&str]) -> PathFindUpdate {
    let alternatives: Vec<Value> = values
        .iter()
        .map(|value| {
            json!({
                "paths_computed": [[{"currency": "USD", "issuer": GATEWAY, "type": 48}]],
                "source_amount": "25000000",
                "destination_amount": {"currency": "USD", "issuer": GATEWAY, "value": value},
            })
        })
        .collect();
    serde_json::from_value(json!({
        "source_account": ACCOUNT,
        "destination_account": ACCOUNT,
        "destination_amount": {"currency": "USD", "issuer": GATEWAY, "value": "-1"},
        "full_reply": true,
        "alternatives": alternatives,
    }))
    .expect("valid update frame")
}

async fn wait_for_route<L, W>(controller: &SwapController<L, W>)
where
    L: LedgerSession,
    W: WalletSession,
{
    for _ in 0..100 {
        if controller.best_route().await.is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("no route arrived");
}

fn slippage(text: &str) -> BigDecimal {
    text.parse().expect("valid decimal")
}

#[tokio::test]
async fn test_full_swap_flow() {
    let ledger = Arc::new(ScriptedLedger::new());
    let wallet = Arc::new(TestWallet::new());
    let controller =
        SwapController::new(ledger.clone(), wallet.clone(), SwapConfig::new(slippage("0.01")));

    controller.start().await.expect("start");
    controller.set_from(Amount::xrp(25_000_000)).await;
    controller.set_to(Amount::issued("USD", GATEWAY, "10").expect("amount")).await;
    assert!(controller.active().await);

    // the engine issued a probe create for the pair
    let requests = ledger.recorded();
    let create = requests.last().expect("create request");
    assert_eq!(create["subcommand"], "create");
    assert_eq!(create["source_account"], ACCOUNT);
    assert_eq!(create["destination_amount"]["value"], "-1");
    assert_eq!(create["send_max"], "25000000");

    // stream a full reply; the smallest destination amount wins
    ledger.sender().send(usd_full_reply(&["12", "10.5", "11"])).await.expect("send");
    wait_for_route(&controller).await;
    let best = controller.best_route().await.expect("route");
    assert_eq!(best.destination_amount, Amount::issued("USD", GATEWAY, "10.5").expect("amount"));

    // execute: amount/send_max mirror the inputs, deliver_min takes 1% off
    let result = controller.swap().await.expect("swap");
    assert!(result.accepted);

    let payments = wallet.payments.lock();
    assert_eq!(payments.len(), 1);
    let payment = &payments[0];
    assert_eq!(payment.account, ACCOUNT);
    assert_eq!(payment.destination, ACCOUNT);
    assert_eq!(payment.amount, Amount::issued("USD", GATEWAY, "10").expect("amount"));
    assert_eq!(payment.send_max, Amount::xrp(25_000_000));
    assert_eq!(payment.deliver_min, Amount::issued("USD", GATEWAY, "9.9").expect("amount"));
    assert_eq!(payment.paths, best.paths_computed);

    let tx = payment.to_tx_json();
    assert_eq!(tx["TransactionType"], "Payment");
    assert_eq!(tx["DeliverMin"]["value"], "9.9");
}

#[tokio::test]
async fn test_swap_without_route_fails() {
    let ledger = Arc::new(ScriptedLedger::new());
    let wallet = Arc::new(TestWallet::new());
    let controller = SwapController::new(ledger, wallet.clone(), SwapConfig::default());

    controller.start().await.expect("start");
    controller.set_from(Amount::xrp(25_000_000)).await;
    controller.set_to(Amount::issued("USD", GATEWAY, "10").expect("amount")).await;

    // still searching, nothing streamed yet
    assert!(controller.active().await);
    assert!(matches!(controller.swap().await, Err(SwapError::NoRoute)));
    assert!(wallet.payments.lock().is_empty());
}

#[tokio::test]
async fn test_zero_source_amount_never_subscribes() {
    let ledger = Arc::new(ScriptedLedger::new());
    let wallet = Arc::new(TestWallet::new());
    let controller = SwapController::new(ledger.clone(), wallet, SwapConfig::default());

    controller.start().await.expect("start");
    controller.set_from(Amount::xrp(0)).await;
    controller.set_to(Amount::issued("USD", GATEWAY, "10").expect("amount")).await;

    assert!(!controller.active().await);
    assert!(ledger.recorded().is_empty());
}

#[tokio::test]
async fn test_shutdown_closes_subscription() {
    let ledger = Arc::new(ScriptedLedger::new());
    let wallet = Arc::new(TestWallet::new());
    let controller = SwapController::new(ledger.clone(), wallet, SwapConfig::default());

    controller.start().await.expect("start");
    controller.set_from(Amount::xrp(25_000_000)).await;
    controller.set_to(Amount::issued("USD", GATEWAY, "10").expect("amount")).await;

    controller.shutdown().await;
    assert!(!controller.active().await);
    let requests = ledger.recorded();
    assert_eq!(requests.last().expect("close request")["subcommand"], "close");

    // second shutdown is a no-op
    let closes_before = requests.iter().filter(|r| r["subcommand"] == "close").count();
    controller.shutdown().await;
    let closes_after =
        ledger.recorded().iter().filter(|r| r["subcommand"] == "close").count();
    assert_eq!(closes_before, closes_after);
}
