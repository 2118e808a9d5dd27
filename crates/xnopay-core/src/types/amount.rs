use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize, de::Visitor};

use crate::errors::{Error, Result};

/// An amount of Nano in raw, the smallest indivisible unit.
///
/// The node encodes amounts as decimal strings because they do not fit in
/// a JSON double. `RawAmount` serializes the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawAmount(pub u128);

/// Denominations of Nano, expressed by how many raw make up one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// 1 raw.
    Raw,
    /// 10^24 raw.
    Nano,
    /// 10^27 raw.
    Knano,
    /// 10^30 raw, also known as Mnano. This is the unit wallets display.
    Xno,
}

impl Unit {
    /// Number of decimal places between raw and this unit.
    pub const fn decimals(&self) -> u32 {
        match self {
            Unit::Raw => 0,
            Unit::Nano => 24,
            Unit::Knano => 27,
            Unit::Xno => 30,
        }
    }

    pub const fn raw_per_unit(&self) -> u128 {
        10u128.pow(self.decimals())
    }
}

impl RawAmount {
    pub const ZERO: RawAmount = RawAmount(0);

    /// Parses a decimal amount such as `"1.5"` expressed in `unit`.
    pub fn from_unit(value: &str, unit: Unit) -> Result<Self> {
        let decimals = unit.decimals() as usize;
        if value.is_empty() {
            return Err(Error::amount(value, "empty amount"));
        }

        let (int, frac) = value.split_once('.').unwrap_or((value, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(Error::amount(value, "no digits"));
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(Error::amount(value, "not an unsigned decimal number"));
        }
        if frac.len() > decimals {
            return Err(Error::amount(value, "more fractional digits than the unit allows"));
        }

        let padding = std::iter::repeat_n(b'0', decimals - frac.len());
        let mut raw: u128 = 0;
        for digit in int.bytes().chain(frac.bytes()).chain(padding) {
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add(u128::from(digit - b'0')))
                .ok_or_else(|| Error::amount(value, "amount does not fit in 128 bits"))?;
        }

        Ok(RawAmount(raw))
    }

    /// Renders the exact amount in `unit`, trimming trailing fractional zeros.
    pub fn to_unit_string(&self, unit: Unit) -> String {
        let per_unit = unit.raw_per_unit();
        let int = self.0 / per_unit;
        let frac = self.0 % per_unit;
        if frac == 0 {
            return int.to_string();
        }

        let frac = format!("{:0width$}", frac, width = unit.decimals() as usize);
        format!("{int}.{}", frac.trim_end_matches('0'))
    }

    pub fn from_xno(value: &str) -> Result<Self> {
        Self::from_unit(value, Unit::Xno)
    }

    pub fn to_xno_string(&self) -> String {
        self.to_unit_string(Unit::Xno)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: RawAmount) -> Option<RawAmount> {
        self.0.checked_add(other.0).map(RawAmount)
    }

    pub fn checked_sub(self, other: RawAmount) -> Option<RawAmount> {
        self.0.checked_sub(other.0).map(RawAmount)
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount(u128::from(value))
    }
}

impl From<u128> for RawAmount {
    fn from(value: u128) -> Self {
        RawAmount(value)
    }
}

impl Display for RawAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RawAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_unit(s, Unit::Raw)
    }
}

impl Serialize for RawAmount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct RawAmountVisitor;

impl Visitor<'_> for RawAmountVisitor {
    type Value = RawAmount;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an amount in raw as a decimal string or unsigned integer")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<RawAmount, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<RawAmount, E> {
        Ok(RawAmount::from(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<RawAmount, E> {
        u64::try_from(v)
            .map(RawAmount::from)
            .map_err(|_| E::custom(format!("negative amount: {v}")))
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(RawAmountVisitor)
    }
}
