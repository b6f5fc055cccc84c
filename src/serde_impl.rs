// ============================================================================
// Serde Support (feature = "serde")
// Serializes the raw pair; the magnitude travels as a decimal string
// ============================================================================

use crate::value::Decimal;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Wire document: `{"magnitude": "-12345", "scale": 3}`. The magnitude is
/// a string so arbitrary-precision values survive JSON number limits.
#[derive(Serialize, Deserialize)]
struct RawDecimal {
    magnitude: String,
    scale: u32,
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawDecimal {
            magnitude: self.base_units().to_string(),
            scale: self.scale(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDecimal::deserialize(deserializer)?;
        let magnitude = BigInt::from_str(&raw.magnitude)
            .map_err(|_| serde::de::Error::custom("invalid decimal magnitude"))?;
        Ok(Decimal::from_unscaled(magnitude, raw.scale))
    }
}
