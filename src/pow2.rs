//! Power-of-two arithmetic helpers.
//!
//! Path resolution reduces to "round a mask down to its highest set bit",
//! which is power-of-two arithmetic on the raw representation. These helpers
//! are `const` so the same functions serve compile-time set construction and
//! runtime dispatch decisions.

/// Returns true if `x` is a power of two.
///
/// Zero is not a power of two.
#[must_use]
pub const fn is_pot(x: u32) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Returns the floor of the base-2 logarithm of `x`.
///
/// # Panics
///
/// Panics if `x` is zero. Callers guard the zero case before reaching here.
#[must_use]
pub const fn floor_log2(x: u32) -> u32 {
    assert!(x > 0, "floor_log2 requires a positive argument");
    31 - x.leading_zeros()
}

/// Rounds `x` down to the largest power of two less than or equal to it.
///
/// A power-of-two input is returned unchanged.
///
/// # Panics
///
/// Panics if `x` is zero (there is no power of two below it).
#[must_use]
pub const fn round_down_pot(x: u32) -> u32 {
    1 << floor_log2(x)
}
