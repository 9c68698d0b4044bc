//! computed-path wire types from the path_find protocol

use serde::{Deserialize, Serialize};

use crate::amount::{Amount, AssetId};

/// one hop in a computed path; carried through to the Payment unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub step_type: Option<u8>,
}

/// full path set of one alternative
pub type PathSet = Vec<Vec<PathStep>>;

/// one route offered by the path-finding protocol, immutable once received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathOption {
    #[serde(default)]
    pub paths_computed: PathSet,
    pub source_amount: Amount,
    pub destination_amount: Amount,
}

/// one streamed path_find event
#[derive(Debug, Clone, Deserialize)]
pub struct PathFindUpdate {
    pub source_account: String,
    pub destination_account: String,
    /// raw wire amount; may carry the "-1" probe sentinel, so not an `Amount`
    pub destination_amount: serde_json::Value,
    #[serde(default)]
    pub full_reply: bool,
    #[serde(default)]
    pub alternatives: Vec<PathOption>,
}

impl PathFindUpdate {
    /// asset identity the update quotes routes for
    pub fn destination_asset(&self) -> Option<AssetId> {
        AssetId::from_wire(&self.destination_amount)
    }
}
