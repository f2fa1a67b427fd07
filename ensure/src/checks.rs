//!
//! The checks themselves. All of them are pure: they only read their arguments and either
//! return `Ok(())` or an error holding copies of the inputs.
//!

use alloc::vec::Vec;

use crate::errors::{AddressError, BoundsError, HeadMismatchError};
use crate::{Address, U256};

///
/// Succeeds iff `low <= value <= high`.
///
/// The interval is taken literally: endpoints are not reordered, so with `low > high` every
/// value is rejected.
///
pub fn check_bounds(low: U256, high: U256, value: U256) -> Result<(), BoundsError> {
    if low <= value && value <= high {
        log::trace!("{} is within [{}, {}]", value, low, high);
        return Ok(());
    }

    log::debug!("{} is not within [{}, {}]", value, low, high);
    Err(BoundsError { low, high, value })
}

///
/// Succeeds iff both addresses have the same 160-bit value, whatever their letter case.
///
pub fn check_address(expected: &Address, actual: &Address) -> Result<(), AddressError> {
    if expected == actual {
        log::trace!("address {} matches", actual);
        return Ok(());
    }

    log::debug!("expected address {}, got {}", expected, actual);
    Err(AddressError {
        expected: expected.clone(),
        actual: actual.clone(),
    })
}

///
/// Succeeds iff `data` starts with `head`. Anything past `head.len()` is ignored.
///
/// Data shorter than `head` is a mismatch; the error then carries all of `data`.
///
pub fn check_bytes_head(head: &[u8], data: &[u8]) -> Result<(), HeadMismatchError> {
    let actual_head = &data[..head.len().min(data.len())];
    if actual_head == head {
        log::trace!("head of {} bytes matches", head.len());
        return Ok(());
    }

    log::debug!(
        "head mismatch: expected {} bytes, data has {}",
        head.len(),
        data.len()
    );
    Err(HeadMismatchError {
        expected_head: Vec::from(head),
        actual_head: Vec::from(actual_head),
    })
}
