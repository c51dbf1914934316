//! Pure arithmetic deciding how a level of the tree splits its universe.
//!
//! A level managing a universe of `2^num_bits` values splits every value into
//! `hi_bits(num_bits)` high bits (the child index) and `lo_bits(num_bits)` low
//! bits (the position within that child). The split is a pure function of the
//! bit-count; no state is involved.

/// Number of bits of the full universe managed by a [`crate::VebSet`].
pub const TOTAL_BITS: u32 = 16;

/// Levels of at most this many bits are represented as a flat
/// [`crate::leaf::Leaf`] bit vector instead of a recursive
/// [`crate::node::Node`].
pub const BASE_BITS: u32 = 4;

/// Bit-count of the upper half of a `num_bits`-bit level: `ceil(num_bits / 2)`.
///
/// Child indices of that level live in `[0, 1 << hi_bits)`, which is also the
/// universe of the level's summary.
#[inline]
pub const fn hi_bits(num_bits: u32) -> u32 {
    num_bits - num_bits / 2
}

/// Bit-count of the lower half of a `num_bits`-bit level: `floor(num_bits / 2)`.
///
/// Each child of that level manages a universe of `1 << lo_bits` values.
#[inline]
pub const fn lo_bits(num_bits: u32) -> u32 {
    num_bits / 2
}

/// Split `value` of a `num_bits`-bit universe into `(high, low)`.
///
/// `high` indexes the child, `low` is the position within it. Inverse of
/// [`combine`].
#[inline]
pub fn split(value: u16, num_bits: u32) -> (u16, u16) {
    debug_assert!(num_bits <= TOTAL_BITS);
    let lo = lo_bits(num_bits);
    (value >> lo, value & ((1 << lo) - 1))
}

/// Reassemble a value of a `num_bits`-bit universe from its `(high, low)`
/// halves. Inverse of [`split`].
#[inline]
pub fn combine(high: u16, low: u16, num_bits: u32) -> u16 {
    debug_assert!(num_bits <= TOTAL_BITS);
    (high << lo_bits(num_bits)) | low
}
