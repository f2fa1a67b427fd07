use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct U256(ruint::aliases::U256);

impl U256 {
    pub const ZERO: Self = Self(ruint::aliases::U256::ZERO);
    pub const ONE: Self = Self(ruint::aliases::U256::from_limbs([1, 0, 0, 0]));
    pub const MAX: Self = Self(ruint::aliases::U256::MAX);

    pub const BITS: usize = 256;
    pub const BYTES: usize = 32;

    /// Limbs are little-endian: `limbs[0]` is the least significant word.
    #[inline(always)]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(ruint::aliases::U256::from_limbs(limbs))
    }

    #[inline(always)]
    pub const fn as_limbs(&self) -> &[u64; 4] {
        self.0.as_limbs()
    }

    #[inline(always)]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(ruint::aliases::U256::from_be_bytes(bytes))
    }

    #[inline(always)]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<{ Self::BYTES }>()
    }

    /// `2^exp`, or `None` if it does not fit into 256 bits.
    pub fn pow2(exp: usize) -> Option<Self> {
        if exp >= Self::BITS {
            return None;
        }
        let mut limbs = [0u64; 4];
        limbs[exp / 64] = 1u64 << (exp % 64);

        Some(Self::from_limbs(limbs))
    }
}

impl From<ruint::aliases::U256> for U256 {
    #[inline(always)]
    fn from(value: ruint::aliases::U256) -> Self {
        Self(value)
    }
}

impl From<U256> for ruint::aliases::U256 {
    #[inline(always)]
    fn from(value: U256) -> Self {
        value.0
    }
}

impl From<u64> for U256 {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self::from_limbs([value, 0, 0, 0])
    }
}

impl From<u128> for U256 {
    #[inline(always)]
    fn from(value: u128) -> Self {
        Self::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.as_limbs().iter().rev() {
            write!(f, "{:016x}", limb)?;
        }

        Ok(())
    }
}
