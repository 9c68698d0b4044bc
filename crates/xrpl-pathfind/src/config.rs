//! engine configuration and public ledger endpoints

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// public websocket endpoints for transport implementations
pub const XRPL_MAINNET_WS: &str = "wss://xrplcluster.com";
pub const XRPL_MAINNET_WS_ALT: &str = "wss://s1.ripple.com";
pub const XRPL_TESTNET_WS: &str = "wss://s.altnet.rippletest.net:51233";

/// swap engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// fraction of the quoted destination amount given up as slippage
    /// tolerance, in [0, 1)
    pub slippage: BigDecimal,
}

impl SwapConfig {
    pub fn new(slippage: BigDecimal) -> Self {
        Self { slippage }
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        // 0.5% tolerance
        Self { slippage: BigDecimal::from(5) / BigDecimal::from(1000) }
    }
}
