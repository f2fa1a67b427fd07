//!
//! Contract-style entry point: decode ABI calldata for one of the checks and run it.
//!

use alloc::vec::Vec;
use core::fmt;

use crate::abi::{self, AbiDecodeError, Decoder, Token};
use crate::checks::{check_address, check_bounds, check_bytes_head};
use crate::errors::EnsureError;
use crate::{Address, U256};

pub const CHECK_BOUNDS_SIGNATURE: &str = "checkBounds(uint256,uint256,uint256)";
pub const CHECK_ADDRESS_SIGNATURE: &str = "checkAddress(address,address)";
pub const CHECK_BYTES_HEAD_SIGNATURE: &str = "checkBytesHead(bytes,bytes)";

/// A decoded call. Byte arguments borrow from the calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call<'a> {
    CheckBounds { low: U256, high: U256, value: U256 },
    CheckAddress { expected: Address, actual: Address },
    CheckBytesHead { head: &'a [u8], data: &'a [u8] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The check ran and failed.
    Revert(EnsureError),
    InvalidCalldata(AbiDecodeError),
}

impl ExecutionError {
    /// Encoded custom error for reverts, `None` if the call could not be decoded.
    pub fn revert_data(&self) -> Option<Vec<u8>> {
        match self {
            Self::Revert(e) => Some(e.abi_encode()),
            Self::InvalidCalldata(_) => None,
        }
    }
}

impl From<EnsureError> for ExecutionError {
    fn from(e: EnsureError) -> Self {
        ExecutionError::Revert(e)
    }
}

impl From<AbiDecodeError> for ExecutionError {
    fn from(e: AbiDecodeError) -> Self {
        ExecutionError::InvalidCalldata(e)
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revert(e) => write!(f, "reverted with {}", e),
            Self::InvalidCalldata(e) => write!(f, "invalid calldata: {}", e),
        }
    }
}

impl core::error::Error for ExecutionError {}

impl<'a> Call<'a> {
    pub fn signature(&self) -> &'static str {
        match self {
            Self::CheckBounds { .. } => CHECK_BOUNDS_SIGNATURE,
            Self::CheckAddress { .. } => CHECK_ADDRESS_SIGNATURE,
            Self::CheckBytesHead { .. } => CHECK_BYTES_HEAD_SIGNATURE,
        }
    }

    pub fn decode(calldata: &'a [u8]) -> Result<Self, AbiDecodeError> {
        let (selector, params) = abi::split_selector(calldata)?;
        let mut decoder = Decoder::new(params);

        let call = if selector == abi::selector(CHECK_BOUNDS_SIGNATURE) {
            Self::CheckBounds {
                low: decoder.uint()?,
                high: decoder.uint()?,
                value: decoder.uint()?,
            }
        } else if selector == abi::selector(CHECK_ADDRESS_SIGNATURE) {
            Self::CheckAddress {
                expected: decoder.address()?,
                actual: decoder.address()?,
            }
        } else if selector == abi::selector(CHECK_BYTES_HEAD_SIGNATURE) {
            Self::CheckBytesHead {
                head: decoder.bytes()?,
                data: decoder.bytes()?,
            }
        } else {
            return Err(AbiDecodeError::UnknownSelector(selector));
        };

        Ok(call)
    }

    pub fn encode(&self) -> Vec<u8> {
        let selector = abi::selector(self.signature());
        match self {
            Self::CheckBounds { low, high, value } => abi::encode(
                selector,
                &[Token::Uint(low), Token::Uint(high), Token::Uint(value)],
            ),
            Self::CheckAddress { expected, actual } => abi::encode(
                selector,
                &[Token::Address(expected), Token::Address(actual)],
            ),
            Self::CheckBytesHead { head, data } => {
                abi::encode(selector, &[Token::Bytes(head), Token::Bytes(data)])
            }
        }
    }

    pub fn execute(&self) -> Result<(), EnsureError> {
        match self {
            Self::CheckBounds { low, high, value } => check_bounds(*low, *high, *value)?,
            Self::CheckAddress { expected, actual } => check_address(expected, actual)?,
            Self::CheckBytesHead { head, data } => check_bytes_head(head, data)?,
        }

        Ok(())
    }
}

/// Decodes `calldata` and runs the requested check.
pub fn execute(calldata: &[u8]) -> Result<(), ExecutionError> {
    let call = Call::decode(calldata)?;
    log::trace!("executing {}", call.signature());
    call.execute()?;

    Ok(())
}
