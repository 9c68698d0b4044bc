//! swap intent and payment construction

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use xrpl_types::{Amount, PathOption, PaymentInstruction};

use crate::error::{Result, SwapError};

/// the two-sided amount state plus tolerance for one swap attempt; built
/// fresh per attempt, never persisted
#[derive(Debug, Clone)]
pub struct SwapIntent {
    pub from_amount: Amount,
    pub to_amount: Amount,
    /// fraction in [0, 1) given up from the quoted destination amount
    pub slippage: BigDecimal,
}

/// outcome handed back by the signing wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub id: String,
    pub accepted: bool,
}

/// wallet/session collaborator: owns the signing account and submits
/// payment instructions; this engine never signs or submits itself
#[async_trait]
pub trait WalletSession: Send + Sync + 'static {
    fn account(&self) -> &str;

    async fn create_payment(&self, payment: PaymentInstruction) -> Result<SubmitResult>;
}

/// build the self-payment executing `intent` over `route`
///
/// deliver_min applies the slippage tolerance to the quoted destination
/// amount; send_max caps the source side; the path set passes through
/// unmodified
pub fn build_payment(
    account: &str,
    intent: &SwapIntent,
    route: Option<&PathOption>,
) -> Result<PaymentInstruction> {
    let route = route.ok_or(SwapError::NoRoute)?;
    if intent.slippage < BigDecimal::from(0) || intent.slippage >= BigDecimal::from(1) {
        return Err(SwapError::InvalidSlippage(intent.slippage.to_string()));
    }

    let keep = BigDecimal::from(1) - &intent.slippage;
    let deliver_min = intent.to_amount.scale(&keep)?;

    Ok(PaymentInstruction {
        account: account.to_string(),
        destination: account.to_string(),
        amount: intent.to_amount.clone(),
        send_max: intent.from_amount.clone(),
        deliver_min,
        paths: route.paths_computed.clone(),
    })
}
