use parkcore::numeric::round_to;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Bounds of the mock hourly parking rate, dollars.
const RATE_MIN: f64 = 2.0;
const RATE_MAX: f64 = 5.0;

/// Draws one mock hourly rate per lot, rounded to one decimal.
///
/// The parking feed carries route geometry but no pricing, so the
/// estimator panel runs on seeded stand-in rates; a given seed always
/// produces the same site build.
pub fn mock_hourly_rates(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| round_to(rng.gen_range(RATE_MIN..RATE_MAX), 1))
        .collect()
}
