#![cfg_attr(not(test), no_std)]

// Fixed width 256-bit unsigned integer used as a plain value type.
// Ordering is limb-wise from the most significant limb, so comparisons never go through
// subtraction and can not wrap.

mod parse;
mod uint;

pub use self::parse::ParseU256Error;
pub use self::uint::U256;
