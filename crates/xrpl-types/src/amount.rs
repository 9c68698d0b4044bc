//! ledger amounts: native XRP drops or issued currency values
//!
//! the wire format follows the ledger's convention: XRP amounts are decimal
//! strings of drops, issued amounts are {currency, issuer, value} objects

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::display_currency;
use crate::error::AmountError;

/// a monetary amount in one of the ledger's two shapes
///
/// the shape never changes identity: arithmetic on an XRP amount yields XRP,
/// arithmetic on an issued amount keeps its currency and issuer
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// native XRP, denominated in drops (1 XRP = 1_000_000 drops)
    Xrp { drops: u64 },
    /// issued currency identified by currency code + issuer address
    Issued {
        currency: String,
        issuer: String,
        value: BigDecimal,
    },
}

impl Amount {
    pub fn xrp(drops: u64) -> Self {
        Amount::Xrp { drops }
    }

    /// issued amount from user or wire text; empty text parses as zero
    pub fn issued(currency: &str, issuer: &str, value: &str) -> Result<Self, AmountError> {
        Ok(Amount::Issued {
            currency: currency.to_string(),
            issuer: issuer.to_string(),
            value: parse_value(value)?,
        })
    }

    /// asset identity (currency + issuer, or XRP) without magnitude
    pub fn asset(&self) -> AssetId {
        match self {
            Amount::Xrp { .. } => AssetId::Xrp,
            Amount::Issued { currency, issuer, .. } => AssetId::Issued {
                currency: currency.clone(),
                issuer: issuer.clone(),
            },
        }
    }

    /// numeric magnitude as a decimal, ignoring currency identity
    pub fn value(&self) -> BigDecimal {
        match self {
            Amount::Xrp { drops } => BigDecimal::from(*drops),
            Amount::Issued { value, .. } => value.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Amount::Xrp { drops } => *drops == 0,
            Amount::Issued { value, .. } => value.is_zero(),
        }
    }

    /// compare numeric magnitude only; used to rank path alternatives that
    /// all quote the same destination asset
    pub fn cmp_value(&self, other: &Amount) -> Ordering {
        match (self, other) {
            (Amount::Xrp { drops: a }, Amount::Xrp { drops: b }) => a.cmp(b),
            _ => self.value().cmp(&other.value()),
        }
    }

    /// multiply the numeric value by a non-negative factor, preserving shape
    ///
    /// XRP results round down to whole drops
    pub fn scale(&self, factor: &BigDecimal) -> Result<Amount, AmountError> {
        if *factor < BigDecimal::from(0) {
            return Err(AmountError::InvalidFactor(factor.to_string()));
        }
        match self {
            Amount::Xrp { drops } => {
                let scaled = (BigDecimal::from(*drops) * factor)
                    .with_scale_round(0, RoundingMode::Down);
                let drops = scaled
                    .to_u64()
                    .ok_or_else(|| AmountError::Overflow(scaled.to_string()))?;
                Ok(Amount::Xrp { drops })
            }
            Amount::Issued { currency, issuer, value } => Ok(Amount::Issued {
                currency: currency.clone(),
                issuer: issuer.clone(),
                value: (value * factor).normalized(),
            }),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Xrp { drops } => write!(f, "{} drops", drops),
            Amount::Issued { currency, issuer, value } => {
                write!(f, "{} {}.{}", value.normalized(), display_currency(currency), issuer)
            }
        }
    }
}

fn parse_value(text: &str) -> Result<BigDecimal, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(BigDecimal::from(0));
    }
    let value = BigDecimal::from_str(text)
        .map_err(|_| AmountError::InvalidValue(text.to_string()))?;
    if value < BigDecimal::from(0) {
        return Err(AmountError::InvalidValue(text.to_string()));
    }
    Ok(value)
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Xrp { drops } => serializer.serialize_str(&drops.to_string()),
            Amount::Issued { currency, issuer, value } => {
                let mut s = serializer.serialize_struct("Amount", 3)?;
                s.serialize_field("currency", currency)?;
                s.serialize_field("issuer", issuer)?;
                s.serialize_field("value", &value.normalized().to_string())?;
                s.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Drops(String),
            Issued {
                currency: String,
                issuer: String,
                value: String,
            },
        }

        match Wire::deserialize(deserializer)? {
            Wire::Drops(text) => {
                let drops = text
                    .parse::<u64>()
                    .map_err(|_| DeError::custom(format!("invalid drops amount: {}", text)))?;
                Ok(Amount::Xrp { drops })
            }
            Wire::Issued { currency, issuer, value } => {
                let value = BigDecimal::from_str(&value)
                    .map_err(|_| DeError::custom(format!("invalid issued value: {}", value)))?;
                Ok(Amount::Issued { currency, issuer, value })
            }
        }
    }
}

/// asset identity without magnitude; subscription keys and stale-update
/// checks compare these
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetId {
    Xrp,
    Issued { currency: String, issuer: String },
}

impl AssetId {
    /// identity of a raw wire amount, tolerating the "-1" probe sentinel
    pub fn from_wire(value: &serde_json::Value) -> Option<AssetId> {
        if value.is_string() {
            return Some(AssetId::Xrp);
        }
        let obj = value.as_object()?;
        let currency = obj.get("currency")?.as_str()?;
        if currency == "XRP" {
            return Some(AssetId::Xrp);
        }
        let issuer = obj.get("issuer")?.as_str()?;
        Some(AssetId::Issued {
            currency: currency.to_string(),
            issuer: issuer.to_string(),
        })
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Xrp => write!(f, "XRP"),
            AssetId::Issued { currency, issuer } => {
                write!(f, "{}.{}", display_currency(currency), issuer)
            }
        }
    }
}
