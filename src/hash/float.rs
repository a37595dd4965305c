//! Canonical float normalization.
//!
//! Converts an IEEE-754 double into a platform-independent textual encoding
//! of sign, binary exponent, and binary mantissa digits. Any two doubles
//! that compare numerically equal normalize to the same string, so they
//! always hash identically regardless of how they were computed.

use crate::error::{HashError, HashResult};

/// Safety cap on emitted mantissa digits. A finite double always terminates
/// well below this; exceeding it means the expansion itself is broken.
const MANTISSA_CAP: usize = 1000;

/// Normalize a finite double into its canonical `sign exponent ':' mantissa`
/// encoding.
///
/// Zero (positive or negative) normalizes to `"+0:"`. NaN and the infinities
/// are rejected with [`HashError::NonFiniteFloat`].
pub fn normalize_float(f: f64) -> HashResult<String> {
    if !f.is_finite() {
        return Err(HashError::NonFiniteFloat);
    }
    // -0.0 compares equal to 0.0 and shares its encoding.
    if f == 0.0 {
        return Ok("+0:".to_string());
    }

    let mut out = String::new();
    out.push(if f < 0.0 { '-' } else { '+' });
    let mut f = f.abs();

    // Binary exponent: scale into [0.5, 1].
    let mut e = 0i32;
    while f > 1.0 {
        f /= 2.0;
        e += 1;
    }
    while f < 0.5 {
        f *= 2.0;
        e -= 1;
    }
    out.push_str(&e.to_string());
    out.push(':');

    // Mantissa: binary expansion until the residue is exactly zero. Finite
    // for any double because the mantissa has finitely many bits.
    let mut digits = 0usize;
    while f != 0.0 {
        if f >= 1.0 {
            out.push('1');
            f -= 1.0;
        } else {
            out.push('0');
        }
        digits += 1;
        if digits > MANTISSA_CAP {
            return Err(HashError::MantissaBoundExceeded(MANTISSA_CAP));
        }
        f *= 2.0;
    }

    Ok(out)
}
