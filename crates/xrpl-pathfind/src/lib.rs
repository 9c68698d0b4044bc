//! path discovery and swap construction for the xrp ledger
//!
//! drives one `path_find` subscription at a time against a ledger transport,
//! ranks streamed route alternatives, and builds the self-payment that
//! executes the swap
//!
//! ## usage
//!
//! ```rust,ignore
//! let controller = SwapController::new(ledger, wallet, SwapConfig::default());
//! controller.start().await?;
//! controller.set_from(Amount::xrp(25_000_000)).await;
//! controller.set_to(Amount::issued("USD", issuer, "10")?).await;
//! // ... wait for a route, then
//! let result = controller.swap().await?;
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod ledger;
pub mod rank;
pub mod session;
pub mod swap;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use ledger::*;
pub use rank::*;
pub use session::*;
pub use swap::*;
