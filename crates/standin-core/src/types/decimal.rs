use derive_more::{Display, FromStr};
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Serialize, Serializer};
use std::str::FromStr as _;

///
/// DecimalParts
///
/// Canonical decomposition of a Decimal.
///
/// Invariant:
/// - value == mantissa * 10^-scale
/// - mantissa carries the sign
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecimalParts {
    pub mantissa: i128,
    pub scale: u32,
}

///
/// Decimal
///
/// Exact decimal used for `decimal`/`numeric` column defaults.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    /// Construct a decimal from mantissa and scale.
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Parse a schema default.
    ///
    /// Surrounding whitespace is ignored and scientific notation
    /// (`1.5e3`) is accepted after plain notation fails.
    #[must_use]
    pub fn parse_default(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        WrappedDecimal::from_str(raw)
            .or_else(|_| WrappedDecimal::from_scientific(raw))
            .ok()
            .map(Self)
    }

    /// Decompose into mantissa and scale.
    #[must_use]
    pub const fn parts(&self) -> DecimalParts {
        DecimalParts {
            mantissa: self.0.mantissa(),
            scale: self.0.scale(),
        }
    }

    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.0.scale()
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strip trailing fractional zeros (`19.90` -> `19.9`).
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self(self.0.normalize())
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(d: WrappedDecimal) -> Self {
        Self(d)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self(WrappedDecimal::from(n))
    }
}

// Decimals travel as strings so no precision is lost in transit.
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
