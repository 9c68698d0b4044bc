//! shared types for the xrpl swap engine
//!
//! amounts in the ledger's two shapes (XRP drops vs issued currency),
//! asset identity, computed-path wire types from the path_find protocol,
//! and the Payment instruction handed to the signing wallet

pub mod amount;
pub mod currency;
pub mod error;
pub mod paths;
pub mod payment;

pub use amount::*;
pub use currency::*;
pub use error::*;
pub use paths::*;
pub use payment::*;
