/// Rounds `value` to `decimals` fractional digits.
///
/// The value is scaled by `10^decimals`, rounded half away from zero, and
/// scaled back. Every downstream transform rounds through this function so
/// chart keys stay stable across floating-point noise. Non-finite input
/// propagates unchanged, and a `-0.0` result is left as produced.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
