use core::{fmt, str::FromStr};

use crate::U256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseU256Error {
    Empty,
    /// Digit not valid for the detected radix, or a value that does not fit into 256 bits.
    Invalid(ruint::ParseError),
}

impl fmt::Display for ParseU256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty integer literal"),
            Self::Invalid(e) => write!(f, "invalid integer literal: {}", e),
        }
    }
}

impl core::error::Error for ParseU256Error {}

impl FromStr for U256 {
    type Err = ParseU256Error;

    /// Decimal, or hexadecimal with a `0x`/`0X` prefix.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let (digits, radix) = match src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (src, 10),
        };
        if digits.is_empty() {
            return Err(ParseU256Error::Empty);
        }
        let inner = ruint::aliases::U256::from_str_radix(digits, radix)
            .map_err(ParseU256Error::Invalid)?;

        Ok(Self::from(inner))
    }
}
