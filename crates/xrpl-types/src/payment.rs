//! the signable payment instruction produced by the swap builder

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::amount::Amount;
use crate::paths::PathSet;

/// a self-payment routing value from one asset to another through the given
/// paths; ownership passes to the signing wallet once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    pub account: String,
    pub destination: String,
    pub amount: Amount,
    pub send_max: Amount,
    pub deliver_min: Amount,
    pub paths: PathSet,
}

impl PaymentInstruction {
    /// render the ledger's Payment transaction JSON for signing
    pub fn to_tx_json(&self) -> Value {
        json!({
            "TransactionType": "Payment",
            "Account": self.account,
            "Destination": self.destination,
            "Amount": self.amount,
            "SendMax": self.send_max,
            "DeliverMin": self.deliver_min,
            "Paths": self.paths,
        })
    }
}
