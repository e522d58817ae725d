//! Closed-form asymptotic estimates from analytic number theory.

/// Twin-prime constant C₂ as used by the Hardy–Littlewood estimate.
pub const TWIN_PRIME_CONSTANT: f64 = 1.32032;

/// Hardy–Littlewood asymptotic count of twin primes up to `x`:
/// `2 · C₂ · x / ln(x)²`.
pub fn hardy_littlewood_twin_estimate(x: f64) -> f64 {
    2.0 * TWIN_PRIME_CONSTANT * x / x.ln().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_follows_closed_form() {
        let x = 1000.0f64;
        let expected = 2.0 * 1.32032 * 1000.0 / (1000.0f64.ln() * 1000.0f64.ln());
        assert!((hardy_littlewood_twin_estimate(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn estimate_grows_with_x() {
        assert!(hardy_littlewood_twin_estimate(1e6) > hardy_littlewood_twin_estimate(1e5));
    }
}
