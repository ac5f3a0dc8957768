//! Common utility for fixed-width numeric formatting
//!
//! These are left public for convenience.
//!
//! Evaluated nuclear data formats squeeze scientific numbers into narrow
//! fixed-width fields by dropping the exponent letter, which the standard
//! library formatter cannot produce on its own.

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with formatting for narrow fixed-width fields
pub trait NumFormat {
    /// Sign-delimited scientific form fitted to `width` columns
    ///
    /// The exponent letter is dropped so that the sign character itself
    /// marks the start of the exponent, and the mantissa gives up one
    /// decimal for every extra exponent digit. The result is at most
    /// `width` characters (one less for non-negative values, leaving room
    /// for right-justified padding).
    ///
    /// ```rust
    /// # use rendf_format::NumFormat;
    /// assert_eq!(92235.0.sci_signed(11), "9.223500+4".to_string());
    /// assert_eq!(8.45368e-11.sci_signed(11), "8.45368-11".to_string());
    /// assert_eq!((-1.0).sci_signed(11), "-1.000000+0".to_string());
    /// ```
    fn sci_signed(&self, width: usize) -> String;
}

impl NumFormat for f64 {
    fn sci_signed(&self, width: usize) -> String {
        if !self.is_finite() {
            return f!("{self}");
        }

        // start from a single-digit exponent and trade mantissa decimals
        // for exponent digits until the rounded form fits
        let mut decimals = width.saturating_sub(5);
        loop {
            let num = f!("{:.decimals$e}", self);
            // Safe to `unwrap` as `num` is guaranteed to contain `'e'`
            let (mantissa, exp) = num.split_once('e').unwrap();
            let exp: i64 = exp.parse().unwrap();
            let digits = exp.unsigned_abs().to_string().len();
            let needed = width.saturating_sub(4 + digits);
            let sign = if exp < 0 { '-' } else { '+' };
            if needed == decimals {
                return f!("{mantissa}{sign}{}", exp.unsigned_abs());
            }
            if needed > decimals {
                // rounding crossed a decade boundary (9.999996e-10 at five
                // decimals becomes 1.00000e-9); the mantissa is exactly one
                // so widening it with zeros is lossless
                let zeros = "0".repeat(needed - decimals);
                return f!("{mantissa}{zeros}{sign}{}", exp.unsigned_abs());
            }
            decimals = needed;
        }
    }
}
