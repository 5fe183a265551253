//! Smoothing kernel shared by the density and force passes.
//!
//! Support radius is twice the smoothing length. Both functions are only
//! meaningful inside the support; callers check [`in_support`] first.

use crate::constants::physics::CUTOFF_RADIUS;

/// Whether a pair at `distance` interacts. The boundary itself is included.
#[inline]
pub fn in_support(distance: f64) -> bool {
    distance <= CUTOFF_RADIUS
}

/// Linear pair scale used by the force pass: -1 at contact, 0 at the cutoff
#[inline]
pub fn lin(distance: f64) -> f64 {
    distance / CUTOFF_RADIUS - 1.0
}

/// Density weight: 1 at contact, 0 at the cutoff
#[inline]
pub fn weight(distance: f64) -> f64 {
    let l = lin(distance);
    l * l
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(weight(0.0), 1.0);
        assert_eq!(weight(2.0), 0.0);
        assert_eq!(lin(0.0), -1.0);
        assert_eq!(lin(2.0), 0.0);
        assert_eq!(weight(1.0), 0.25);
    }

    #[test]
    fn test_support_is_inclusive() {
        assert!(in_support(0.0));
        assert!(in_support(2.0));
        assert!(!in_support(2.0 + 1e-12));
        assert!(!in_support(f64::NAN));
    }

    #[test]
    fn test_weight_decreases_on_support() {
        let mut previous = weight(0.0);
        for step in 1..=200 {
            let d = step as f64 * 0.01;
            let w = weight(d);
            assert!(w <= previous, "weight rose at d = {}", d);
            assert!(w >= 0.0);
            previous = w;
        }
    }
}
