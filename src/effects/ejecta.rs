//! Ejecta blanket thickness and fragment size.

/// Ejecta deposit thickness (meters) at `distance_m` from the crater centre.
///
/// t = D_tc⁴ / (112·r³); `+∞` at ground zero.
pub fn ejecta_thickness(transient_diameter: f64, distance_m: f64) -> f64 {
    if distance_m <= 0.0 {
        return f64::INFINITY;
    }
    transient_diameter.powi(4) / (112.0 * distance_m.powi(3))
}

/// Mean ejecta fragment diameter (meters) at `distance_m`.
///
/// d = d_c · (D_fc / 2r)^α,  d_c = 2400 · (D_fc / 2)^−1.62; `+∞` at ground zero.
pub fn mean_fragment_size(final_diameter: f64, distance_m: f64, exponent: f64) -> f64 {
    if distance_m <= 0.0 {
        return f64::INFINITY;
    }
    let rim_size = 2400.0 * (final_diameter / 2.0).powf(-1.62);
    rim_size * (final_diameter / (2.0 * distance_m)).powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_zero_is_infinite() {
        assert_eq!(ejecta_thickness(1000.0, 0.0), f64::INFINITY);
        assert_eq!(mean_fragment_size(1200.0, 0.0, 2.65), f64::INFINITY);
    }

    #[test]
    fn test_thickness_falls_as_inverse_cube() {
        let near = ejecta_thickness(5000.0, 10_000.0);
        let far = ejecta_thickness(5000.0, 20_000.0);
        assert_relative_eq!(near / far, 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fragment_size_at_rim() {
        // At the rim (r = D_fc/2) the size equals the rim fragment size d_c
        let d_fc = 8000.0;
        let d_c = 2400.0 * 4000f64.powf(-1.62);
        assert_relative_eq!(mean_fragment_size(d_fc, 4000.0, 2.65), d_c, max_relative = 1e-12);
        assert!(mean_fragment_size(d_fc, 40_000.0, 2.65) < d_c);
    }
}
