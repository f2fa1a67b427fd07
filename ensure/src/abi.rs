//!
//! Solidity ABI encoding of failed checks as custom-error revert data, and the minimal
//! decoder needed to read it (and check calls) back.
//!
//! Layout follows the standard contract ABI: a 4 byte selector, then one 32 byte head word
//! per parameter. `uint256` and `address` live directly in the head; `bytes` is an offset
//! into the tail, where a length word is followed by the data right-padded to a multiple
//! of 32 bytes.
//!

use alloc::vec::Vec;
use core::fmt;

use sha3::{Digest, Keccak256};
use strum::IntoEnumIterator;

use crate::errors::{AddressError, BoundsError, EnsureError, EnsureErrorKind, HeadMismatchError};
use crate::{Address, U256};

pub const SELECTOR_SIZE: usize = 4;
pub const WORD_SIZE: usize = 32;

const ADDRESS_PADDING: usize = WORD_SIZE - 20;

/// First four bytes of keccak-256 of a canonical signature such as `"f(uint256)"`.
pub fn selector(signature: &str) -> [u8; SELECTOR_SIZE] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut result = [0u8; SELECTOR_SIZE];
    result.copy_from_slice(&hash[..SELECTOR_SIZE]);

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiDecodeError {
    /// Input ends before a selector or a head word that must be present.
    InputTooShort,
    UnknownSelector([u8; SELECTOR_SIZE]),
    /// Upper 12 bytes of an address word are not zero.
    DirtyAddressPadding,
    /// A `bytes` offset does not fit the input.
    InvalidOffset,
    /// A `bytes` length does not fit the input.
    InvalidLength,
}

impl fmt::Display for AbiDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooShort => write!(f, "input too short"),
            Self::UnknownSelector(s) => {
                write!(f, "unknown selector {}", crate::errors::HexBytes(s))
            }
            Self::DirtyAddressPadding => write!(f, "address word has non-zero padding"),
            Self::InvalidOffset => write!(f, "dynamic offset out of range"),
            Self::InvalidLength => write!(f, "dynamic length out of range"),
        }
    }
}

impl core::error::Error for AbiDecodeError {}

pub(crate) enum Token<'a> {
    Uint(&'a U256),
    Address(&'a Address),
    Bytes(&'a [u8]),
}

pub(crate) fn encode(selector: [u8; SELECTOR_SIZE], tokens: &[Token<'_>]) -> Vec<u8> {
    let head_size = tokens.len() * WORD_SIZE;
    let mut head = Vec::with_capacity(SELECTOR_SIZE + head_size);
    let mut tail = Vec::new();
    head.extend_from_slice(&selector);

    for token in tokens {
        match token {
            Token::Uint(value) => head.extend_from_slice(&value.to_be_bytes()),
            Token::Address(address) => {
                head.extend_from_slice(&[0u8; ADDRESS_PADDING]);
                head.extend_from_slice(&address.to_bytes());
            }
            Token::Bytes(data) => {
                let offset = (head_size + tail.len()) as u64;
                head.extend_from_slice(&U256::from(offset).to_be_bytes());
                tail.extend_from_slice(&U256::from(data.len() as u64).to_be_bytes());
                tail.extend_from_slice(data);
                tail.resize(tail.len().next_multiple_of(WORD_SIZE), 0);
            }
        }
    }
    head.extend_from_slice(&tail);

    head
}

pub(crate) fn split_selector(
    input: &[u8],
) -> Result<([u8; SELECTOR_SIZE], &[u8]), AbiDecodeError> {
    let (selector, params) = input
        .split_first_chunk::<SELECTOR_SIZE>()
        .ok_or(AbiDecodeError::InputTooShort)?;

    Ok((*selector, params))
}

///
/// Sequential reader over the parameter area (everything after the selector).
///
pub(crate) struct Decoder<'a> {
    params: &'a [u8],
    head_offset: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(params: &'a [u8]) -> Self {
        Self {
            params,
            head_offset: 0,
        }
    }

    fn word_at(
        &self,
        offset: usize,
        err: AbiDecodeError,
    ) -> Result<&'a [u8; WORD_SIZE], AbiDecodeError> {
        let end = offset.checked_add(WORD_SIZE).ok_or(err)?;
        let slice = self.params.get(offset..end).ok_or(err)?;

        <&[u8; WORD_SIZE]>::try_from(slice).map_err(|_| err)
    }

    fn next_word(&mut self) -> Result<&'a [u8; WORD_SIZE], AbiDecodeError> {
        let word = self.word_at(self.head_offset, AbiDecodeError::InputTooShort)?;
        self.head_offset += WORD_SIZE;

        Ok(word)
    }

    pub(crate) fn uint(&mut self) -> Result<U256, AbiDecodeError> {
        Ok(U256::from_be_bytes(*self.next_word()?))
    }

    pub(crate) fn address(&mut self) -> Result<Address, AbiDecodeError> {
        let word = self.next_word()?;
        let (padding, raw) = word.split_at(ADDRESS_PADDING);
        if padding.iter().any(|b| *b != 0) {
            return Err(AbiDecodeError::DirtyAddressPadding);
        }

        let raw: [u8; 20] = raw
            .try_into()
            .map_err(|_| AbiDecodeError::DirtyAddressPadding)?;

        Ok(Address::from_bytes(raw))
    }

    pub(crate) fn bytes(&mut self) -> Result<&'a [u8], AbiDecodeError> {
        let offset = word_to_usize(self.next_word()?).ok_or(AbiDecodeError::InvalidOffset)?;
        let len_word = self.word_at(offset, AbiDecodeError::InvalidOffset)?;
        let len = word_to_usize(len_word).ok_or(AbiDecodeError::InvalidLength)?;

        let start = offset + WORD_SIZE;
        let end = start.checked_add(len).ok_or(AbiDecodeError::InvalidLength)?;
        self.params.get(start..end).ok_or(AbiDecodeError::InvalidLength)
    }
}

fn word_to_usize(word: &[u8; WORD_SIZE]) -> Option<usize> {
    let (high, low) = word.split_at(WORD_SIZE - 8);
    if high.iter().any(|b| *b != 0) {
        return None;
    }
    let low: [u8; 8] = low.try_into().ok()?;

    usize::try_from(u64::from_be_bytes(low)).ok()
}

impl EnsureError {
    /// Revert data of the matching Solidity custom error.
    pub fn abi_encode(&self) -> Vec<u8> {
        let selector = self.kind().selector();
        match self {
            Self::Bounds(e) => encode(
                selector,
                &[Token::Uint(&e.low), Token::Uint(&e.high), Token::Uint(&e.value)],
            ),
            Self::Address(e) => encode(
                selector,
                &[Token::Address(&e.expected), Token::Address(&e.actual)],
            ),
            Self::HeadMismatch(e) => encode(
                selector,
                &[Token::Bytes(&e.expected_head), Token::Bytes(&e.actual_head)],
            ),
        }
    }

    ///
    /// Parses revert data produced by `abi_encode` (or by a contract raising the same
    /// custom errors). The original letter case of addresses does not survive the wire
    /// format, so decoded addresses carry their EIP-55 form.
    ///
    pub fn abi_decode(data: &[u8]) -> Result<Self, AbiDecodeError> {
        let (selector, params) = split_selector(data)?;
        let kind = EnsureErrorKind::iter()
            .find(|kind| kind.selector() == selector)
            .ok_or(AbiDecodeError::UnknownSelector(selector))?;

        let mut decoder = Decoder::new(params);
        let error = match kind {
            EnsureErrorKind::Bounds => BoundsError {
                low: decoder.uint()?,
                high: decoder.uint()?,
                value: decoder.uint()?,
            }
            .into(),
            EnsureErrorKind::Address => AddressError {
                expected: decoder.address()?,
                actual: decoder.address()?,
            }
            .into(),
            EnsureErrorKind::HeadMismatch => HeadMismatchError {
                expected_head: Vec::from(decoder.bytes()?),
                actual_head: Vec::from(decoder.bytes()?),
            }
            .into(),
        };

        Ok(error)
    }
}
