#![cfg_attr(not(test), no_std)]
#![allow(clippy::result_large_err)]

//!
//! Deterministic checks over fixed-width EVM values.
//!
//! Three checks are exposed: an inclusive bounds check over 256-bit integers, an address
//! equality check that ignores letter case, and a prefix check over byte strings. A failed
//! check returns one of three structured errors carrying the offending values; the errors
//! can also be encoded as (and decoded from) Solidity custom-error revert data.
//!

extern crate alloc;

pub mod abi;
pub mod address;
pub mod checks;
pub mod dispatch;
pub mod errors;

pub use self::address::{Address, ParseAddressError};
pub use self::checks::{check_address, check_bounds, check_bytes_head};
pub use self::errors::{AddressError, BoundsError, EnsureError, EnsureErrorKind, HeadMismatchError};
pub use u256::U256;
