//! Text to Julia parameter.
//!
//! The text is split in two halves; the sum of character codes of each half
//! is mapped linearly onto `[-1.5, 1.5]` and becomes one component of `c`.

use std::fmt;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::math::{map_range, C};

/// Parameter used for empty input. A well-known, visually rich Julia set.
pub const DEFAULT_PARAMETER: ComplexNumber = ComplexNumber { c_re: -0.7, c_im: 0.27015 };

/// Assumed maximum half sum: 100 chars per half at code 255.
pub const MAX_HALF_SUM: f64 = 255.0 * 100.0;

const OUT_MIN: f64 = -1.5;
const OUT_MAX: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct ComplexNumber {
    pub c_re: f64,
    pub c_im: f64,
}

impl ComplexNumber {
    pub fn new(c_re: f64, c_im: f64) -> Self {
        ComplexNumber { c_re, c_im }
    }

    pub fn to_c(&self) -> C {
        C::new(self.c_re, self.c_im)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.c_im.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.6} {} {:.6}i", self.c_re, sign, self.c_im.abs())
    }
}

/// Maps `text` to a Julia parameter. Total and deterministic.
///
/// The first half gets the extra char for odd lengths. Results are not
/// clamped: halves longer than 100 chars or with high codes leave
/// `[-1.5, 1.5]`.
pub fn encode_text(text: &str) -> ComplexNumber {
    if text.is_empty() {
        return DEFAULT_PARAMETER;
    }

    let len = text.chars().count();
    let mid = len.div_ceil(2);

    let sum1: u64 = text.chars().take(mid).map(|ch| ch as u64).sum();
    let sum2: u64 = text.chars().skip(mid).map(|ch| ch as u64).sum();

    ComplexNumber {
        c_re: map_range(sum1 as f64, 0.0, MAX_HALF_SUM, OUT_MIN, OUT_MAX),
        c_im: map_range(sum2 as f64, 0.0, MAX_HALF_SUM, OUT_MIN, OUT_MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_uses_default() {
        let p = encode_text("");
        assert_eq!(p.c_re, -0.7);
        assert_eq!(p.c_im, 0.27015);
    }

    #[test]
    fn splits_with_ceiling() {
        let p = encode_text("Hi");
        assert!((p.c_re - (72.0 * 3.0 / 25500.0 - 1.5)).abs() < 1e-9);
        assert!((p.c_im - (105.0 * 3.0 / 25500.0 - 1.5)).abs() < 1e-9);
        assert!((p.c_re - -1.491529411764706).abs() < 1e-9);
        assert!((p.c_im - -1.487647058823529).abs() < 1e-9);
    }

    #[test]
    fn odd_length_gives_first_half_the_middle_char() {
        // "abc" -> "ab" | "c"
        let p = encode_text("abc");
        let q = ComplexNumber {
            c_re: map_range((97 + 98) as f64, 0.0, MAX_HALF_SUM, -1.5, 1.5),
            c_im: map_range(99.0, 0.0, MAX_HALF_SUM, -1.5, 1.5),
        };
        assert_eq!(p, q);
    }

    #[test]
    fn single_char_leaves_second_half_empty() {
        let p = encode_text("A");
        assert_eq!(p.c_im, -1.5);
    }

    #[test]
    fn deterministic_bits() {
        let a = encode_text("Hello Fractal World!");
        let b = encode_text("Hello Fractal World!");
        assert_eq!(a.c_re.to_bits(), b.c_re.to_bits());
        assert_eq!(a.c_im.to_bits(), b.c_im.to_bits());
    }

    #[test]
    fn long_input_is_not_clamped() {
        let text = "\u{ff}".repeat(400);
        let p = encode_text(&text);
        assert!(p.c_re > 1.5);
        assert!(p.c_im > 1.5);
    }

    #[test]
    fn display_formats_both_parts() {
        assert_eq!(DEFAULT_PARAMETER.to_string(), "-0.700000 + 0.270150i");
    }
}
