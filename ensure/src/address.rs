use alloc::string::String;
use core::{fmt, str::FromStr};

use ruint::aliases::B160;
use sha3::{Digest, Keccak256};

const ADDRESS_BYTES: usize = 20;
const ADDRESS_HEX_DIGITS: usize = ADDRESS_BYTES * 2;
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

///
/// 160-bit account address.
///
/// Keeps the canonical value used for comparison next to the text it was created from, so
/// that diagnostics can echo the caller's input verbatim. Equality and hashing only look at
/// the canonical value: `0xabc...` and `0xABC...` are the same address.
///
#[derive(Clone)]
#[cfg_attr(
    feature = "testing",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Address {
    raw: B160,
    text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAddressError {
    /// Number of hex digits after the optional `0x` prefix is not 40.
    InvalidLength(usize),
    InvalidHexCharacter { c: char, index: usize },
    /// Mixed-case input whose letter case does not match its EIP-55 checksum.
    InvalidChecksum,
}

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected {} hex digits, got {}", ADDRESS_HEX_DIGITS, len)
            }
            Self::InvalidHexCharacter { c, index } => {
                write!(f, "invalid hex character {:?} at position {}", c, index)
            }
            Self::InvalidChecksum => write!(f, "invalid EIP-55 checksum"),
        }
    }
}

impl core::error::Error for ParseAddressError {}

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self::from(B160::from_be_bytes(bytes))
    }

    /// Like `from_str`, but mixed-case input must carry a valid EIP-55 checksum.
    /// All-lowercase and all-uppercase input is accepted as is.
    pub fn parse_checksummed(src: &str) -> Result<Self, ParseAddressError> {
        let address: Self = src.parse()?;
        let digits = strip_hex_prefix(&address.text);
        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && !address.has_valid_checksum() {
            return Err(ParseAddressError::InvalidChecksum);
        }

        Ok(address)
    }

    /// Text exactly as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn raw(&self) -> &B160 {
        &self.raw
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        self.raw.to_be_bytes::<ADDRESS_BYTES>()
    }

    pub fn to_checksum(&self) -> String {
        let digits = checksum_digits(&self.to_bytes());
        let mut result = String::with_capacity(2 + ADDRESS_HEX_DIGITS);
        result.push_str("0x");
        result.extend(digits.iter().map(|b| *b as char));

        result
    }

    /// Whether the supplied text matches the EIP-55 form byte for byte.
    pub fn has_valid_checksum(&self) -> bool {
        strip_hex_prefix(&self.text).as_bytes() == checksum_digits(&self.to_bytes())
    }
}

fn strip_hex_prefix(src: &str) -> &str {
    src.strip_prefix("0x")
        .or_else(|| src.strip_prefix("0X"))
        .unwrap_or(src)
}

fn checksum_digits(bytes: &[u8; ADDRESS_BYTES]) -> [u8; ADDRESS_HEX_DIGITS] {
    let mut digits = [0u8; ADDRESS_HEX_DIGITS];
    for (i, byte) in bytes.iter().enumerate() {
        digits[2 * i] = HEX_DIGITS[(byte >> 4) as usize];
        digits[2 * i + 1] = HEX_DIGITS[(byte & 0x0f) as usize];
    }

    let hash = Keccak256::digest(digits);
    for (i, digit) in digits.iter_mut().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if nibble >= 8 {
            digit.make_ascii_uppercase();
        }
    }

    digits
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(src);
        if digits.len() != ADDRESS_HEX_DIGITS {
            return Err(ParseAddressError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; ADDRESS_BYTES];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                ParseAddressError::InvalidHexCharacter { c, index }
            }
            // length is validated above, non-ASCII input ends up here
            _ => ParseAddressError::InvalidLength(digits.chars().count()),
        })?;

        Ok(Self {
            raw: B160::from_be_bytes(bytes),
            text: String::from(src),
        })
    }
}

impl TryFrom<String> for Address {
    type Error = ParseAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.text
    }
}

impl From<B160> for Address {
    fn from(raw: B160) -> Self {
        let mut address = Self {
            raw,
            text: String::new(),
        };
        address.text = address.to_checksum();

        address
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Address {}

impl core::hash::Hash for Address {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.text)
    }
}
