//!
//! This module contains bunch of standalone utility methods, useful for testing.
//! They panic on malformed literals: a broken test vector is a bug in the test.
//!

use ensure::{Address, U256};

///
/// Parse address literal, keeping its letter case.
///
pub fn address(literal: &str) -> Address {
    literal
        .parse()
        .unwrap_or_else(|e| panic!("bad address literal {}: {}", literal, e))
}

///
/// Decode `0x`-prefixed (or bare) hex literal.
///
pub fn bytes(literal: &str) -> Vec<u8> {
    let digits = literal.strip_prefix("0x").unwrap_or(literal);
    hex::decode(digits).unwrap_or_else(|e| panic!("bad bytes literal {}: {}", literal, e))
}

///
/// Parse decimal or `0x` hex integer literal.
///
pub fn uint(literal: &str) -> U256 {
    literal
        .parse()
        .unwrap_or_else(|e| panic!("bad integer literal {}: {}", literal, e))
}

pub fn pow2(exp: usize) -> U256 {
    U256::pow2(exp).unwrap_or_else(|| panic!("2^{} does not fit into 256 bits", exp))
}

///
/// Build calldata out of hex selector and list of integer literals, each taking one word.
///
pub fn construct_calldata(selector: &str, data: &[&str]) -> Vec<u8> {
    let mut cd = bytes(selector);
    for val in data {
        cd.extend_from_slice(&uint(val).to_be_bytes());
    }

    cd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(bytes("0x00000001"), vec![0, 0, 0, 1]);
        assert_eq!(bytes(""), Vec::<u8>::new());
        assert_eq!(uint("3333333333"), U256::from(3333333333u64));
        assert_eq!(pow2(8), U256::from(256u64));
        assert_eq!(address("0x0000000000000000000000000000000000000001").to_bytes()[19], 1);
    }

    #[test]
    fn calldata_layout() {
        let cd = construct_calldata("0xa0302a3e", &["1", "2", "3"]);
        assert_eq!(cd.len(), 4 + 3 * 32);
        assert_eq!(&cd[..4], &[0xa0, 0x30, 0x2a, 0x3e]);
        assert_eq!(cd[4 + 31], 1);
        assert_eq!(cd[4 + 3 * 32 - 1], 3);
    }
}
