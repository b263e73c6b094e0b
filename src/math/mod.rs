/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Folds `-0.0` into `+0.0` so that values equal under `==` share one bit pattern.
#[must_use]
pub fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zeros_share_bits() {
        assert_eq!(canonical_bits(-0.0), canonical_bits(0.0));
    }

    #[test]
    fn distinct_values_differ() {
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
        assert_ne!(canonical_bits(0.1), canonical_bits(0.1 + f64::EPSILON));
    }
}
