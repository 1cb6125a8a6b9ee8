//! Float holds utility functions for taking a double apart into its IEEE-754 fields and putting it
//! back together, plus the bit counting helpers the exact conversions are built on.

/// Number of explicitly stored significand bits in a double.
pub const SIGNIFICAND_BITS: u32 = 52;

/// Bias of the stored exponent field.
pub const EXPONENT_BIAS: i32 = 1023;

/// Unbiased exponent of the least significant bit of a subnormal double.
pub const MIN_SUBNORMAL_EXPONENT: i32 = 1 - EXPONENT_BIAS - SIGNIFICAND_BITS as i32;

/// The leading 1 that is implicit in the significand of every normalized double.
pub const IMPLICIT_BIT: u64 = 1 << SIGNIFICAND_BITS;

const SIGNIFICAND_MASK: u64 = IMPLICIT_BIT - 1;
const EXPONENT_MASK: u64 = 0x7ff;

/// The sign, biased exponent and significand fields of a double.
///
/// Converting a double into [`FloatParts`] and back with [`FloatParts::to_f64`] is lossless, down
/// to the sign of zero and NaN payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatParts {
    /// Whether the sign bit is set
    pub negative: bool,
    /// The biased exponent, `0..=2047`. Zero marks zeros and subnormals.
    pub exponent: u16,
    /// The 52 explicitly stored significand bits
    pub significand: u64,
}

impl FloatParts {
    /// Reassembles the fields into a double.
    pub fn to_f64(self) -> f64 {
        let sign = (self.negative as u64) << 63;
        let exponent = (self.exponent as u64 & EXPONENT_MASK) << SIGNIFICAND_BITS;
        f64::from_bits(sign | exponent | (self.significand & SIGNIFICAND_MASK))
    }

    /// Returns true for zeros and subnormals, which have no implicit leading 1.
    pub fn is_subnormal(&self) -> bool {
        self.exponent == 0
    }

    /// Returns the magnitude of the double as `(integer, exponent)` such that the magnitude is
    /// exactly `integer * 2^exponent`, with `integer` odd unless it is zero.
    pub fn reduced_integer(&self) -> (u64, i32) {
        let (integer, exponent) = if self.is_subnormal() {
            (self.significand, MIN_SUBNORMAL_EXPONENT)
        } else {
            (
                self.significand | IMPLICIT_BIT,
                self.exponent as i32 - EXPONENT_BIAS - SIGNIFICAND_BITS as i32,
            )
        };

        if integer == 0 {
            return (0, 0);
        }

        let shift = integer.trailing_zeros();
        (integer >> shift, exponent + shift as i32)
    }
}

impl From<f64> for FloatParts {
    fn from(f: f64) -> Self {
        decompose(f)
    }
}

/// Decodes a double into its sign, biased exponent and significand fields.
pub fn decompose(f: f64) -> FloatParts {
    let bits = f.to_bits();
    FloatParts {
        negative: bits >> 63 == 1,
        exponent: ((bits >> SIGNIFICAND_BITS) & EXPONENT_MASK) as u16,
        significand: bits & SIGNIFICAND_MASK,
    }
}

/// Number of bits needed to represent `n`, zero for zero.
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Number of low-order zero bits in `significand` once the implicit leading 1 is put back in
/// front of it. Always in `0..=52`.
pub fn trailing_zero_shift(significand: u64) -> u32 {
    ((significand & SIGNIFICAND_MASK) | IMPLICIT_BIT).trailing_zeros()
}

/// Number of significand bits, counted from the top of the stored field, up to and including
/// the lowest set bit. Zero when no stored bit is set.
pub fn fraction_bits(significand: u64) -> u32 {
    SIGNIFICAND_BITS - trailing_zero_shift(significand)
}

/// Restores the implicit leading 1 in front of `significand` and strips its trailing zero bits.
///
/// Returns the resulting odd integer together with [`fraction_bits`], so that
/// `1.significand == integer / 2^fraction_bits`.
pub fn significand_with_implicit_bit(significand: u64) -> (u64, u32) {
    let shift = trailing_zero_shift(significand);
    (
        ((significand & SIGNIFICAND_MASK) | IMPLICIT_BIT) >> shift,
        SIGNIFICAND_BITS - shift,
    )
}
