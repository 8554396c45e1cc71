use std::f64::consts::PI;

// Measured from the flat face.
pub fn dome_centroid_offset(height: f64) -> f64 {
    4.0 * height / (3.0 * PI)
}

// Measured from the `r_base` end.
pub fn frustum_centroid(height: f64, r_base: f64, r_top: f64) -> f64 {
    height / 3.0 * (2.0 * r_top + r_base) / (r_top + r_base)
}

// Measured from the base.
pub fn cone_centroid(height: f64) -> f64 {
    height / 3.0
}

pub fn frustum_surface_area(height: f64, r_base: f64, r_top: f64) -> f64 {
    PI * (r_base + r_top) * ((r_base - r_top).powi(2) + height.powi(2)).sqrt()
}

pub fn cylinder_surface_area(height: f64, radius: f64) -> f64 {
    2.0 * PI * radius * height
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frustum_centroid_reduces_to_cylinder() {
        assert_abs_diff_eq!(frustum_centroid(3.0, 1.0, 1.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_frustum_centroid_shifts_toward_wider_end() {
        // Wider base pulls the centroid down.
        assert!(frustum_centroid(3.0, 2.0, 1.0) < 1.5);
        assert!(frustum_centroid(3.0, 1.0, 2.0) > 1.5);
    }

    #[test]
    fn test_frustum_area_reduces_to_cylinder() {
        assert_abs_diff_eq!(
            frustum_surface_area(2.0, 0.5, 0.5),
            cylinder_surface_area(2.0, 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dome_centroid_offset() {
        assert_abs_diff_eq!(dome_centroid_offset(PI), 4.0 / 3.0, epsilon = 1e-12);
    }
}
