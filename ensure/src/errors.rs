use alloc::vec::Vec;
use core::fmt;

use crate::{Address, U256};

///
/// `value` is outside of the literal `[low, high]` interval.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "testing", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundsError {
    pub low: U256,
    pub high: U256,
    pub value: U256,
}

///
/// Two addresses differ. Both are kept with the letter case they were supplied in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "testing", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressError {
    pub expected: Address,
    pub actual: Address,
}

///
/// Leading bytes of the data do not match the expected head.
///
/// `actual_head` holds the data truncated to the length of `expected_head`, or the whole
/// data if it was shorter than that.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "testing", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadMismatchError {
    pub expected_head: Vec<u8>,
    pub actual_head: Vec<u8>,
}

///
/// Any failed check.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "testing", derive(serde::Serialize, serde::Deserialize))]
pub enum EnsureError {
    Bounds(BoundsError),
    Address(AddressError),
    HeadMismatch(HeadMismatchError),
}

/// Discriminant of `EnsureError`. Displays as the Solidity custom error name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum EnsureErrorKind {
    #[strum(serialize = "NotWithinBounds")]
    Bounds,
    #[strum(serialize = "NotSpecificAddress")]
    Address,
    #[strum(serialize = "HeadBytesMismatch")]
    HeadMismatch,
}

impl EnsureErrorKind {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Canonical Solidity signature, as used for selector computation.
    pub fn signature(&self) -> &'static str {
        match self {
            Self::Bounds => "NotWithinBounds(uint256,uint256,uint256)",
            Self::Address => "NotSpecificAddress(address,address)",
            Self::HeadMismatch => "HeadBytesMismatch(bytes,bytes)",
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        crate::abi::selector(self.signature())
    }
}

impl EnsureError {
    pub fn kind(&self) -> EnsureErrorKind {
        match self {
            Self::Bounds(_) => EnsureErrorKind::Bounds,
            Self::Address(_) => EnsureErrorKind::Address,
            Self::HeadMismatch(_) => EnsureErrorKind::HeadMismatch,
        }
    }
}

impl From<BoundsError> for EnsureError {
    fn from(e: BoundsError) -> Self {
        EnsureError::Bounds(e)
    }
}

impl From<AddressError> for EnsureError {
    fn from(e: AddressError) -> Self {
        EnsureError::Address(e)
    }
}

impl From<HeadMismatchError> for EnsureError {
    fn from(e: HeadMismatchError) -> Self {
        EnsureError::HeadMismatch(e)
    }
}

pub(crate) struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            EnsureErrorKind::Bounds,
            self.low,
            self.high,
            self.value
        )
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})",
            EnsureErrorKind::Address,
            self.expected,
            self.actual
        )
    }
}

impl fmt::Display for HeadMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})",
            EnsureErrorKind::HeadMismatch,
            HexBytes(&self.expected_head),
            HexBytes(&self.actual_head)
        )
    }
}

impl fmt::Display for EnsureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(e) => fmt::Display::fmt(e, f),
            Self::Address(e) => fmt::Display::fmt(e, f),
            Self::HeadMismatch(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl core::error::Error for BoundsError {}
impl core::error::Error for AddressError {}
impl core::error::Error for HeadMismatchError {}
impl core::error::Error for EnsureError {}
