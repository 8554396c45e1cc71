// Pitch/yaw (self) inertia

pub fn j0_thin_ring(m: f64, r: f64) -> f64 {
    m * r.powi(2) / 2.0
}

pub fn j0_thin_cylinder(m: f64, r: f64, h: f64) -> f64 {
    m * (r.powi(2) / 2.0 + h.powi(2) / 12.0)
}

pub fn j0_thin_ellipsoid(m: f64, r: f64, h: f64) -> f64 {
    m * (r.powi(2) / 5.0 + h.powi(2))
}

pub fn j0_thin_frustum(m: f64, r1: f64, r2: f64, h: f64) -> f64 {
    m * ((r1.powi(2) + r2.powi(2)) / 4.0
        + h.powi(2) / 18.0 * (1.0 + 2.0 * r1 * r2 / (r1 + r2).powi(2)))
}

pub fn j0_thin_hemisphere(m: f64, r: f64) -> f64 {
    m * r.powi(2)
}

pub fn j0_solid_cylinder(m: f64, r: f64, h: f64) -> f64 {
    m * (r.powi(2) / 4.0 + h.powi(2) / 12.0)
}

pub fn j0_solid_ellipsoid(m: f64, r: f64, h: f64) -> f64 {
    m * (r.powi(2) / 5.0 + h.powi(2))
}

pub fn j0_solid_rod(m: f64, l: f64) -> f64 {
    m * l.powi(2) / 12.0
}

pub fn j0_thin_cone(m: f64, r: f64, h: f64) -> f64 {
    m * (r.powi(2) / 4.0 + h.powi(2) / 18.0)
}

// Roll inertia about the centerline

pub fn roll_thin_ring(m: f64, r: f64) -> f64 {
    m * r.powi(2)
}

pub fn roll_thin_cylinder(m: f64, r: f64) -> f64 {
    m * r.powi(2)
}

pub fn roll_thin_ellipsoid(m: f64, r: f64, h: f64) -> f64 {
    2.0 * m * h / (3.0 * r - h) * (r.powi(2) - 0.75 * r * h + 3.0 / 20.0 * h.powi(2))
}

pub fn roll_thin_hemisphere(m: f64, r: f64) -> f64 {
    2.0 / 3.0 * m * r.powi(2)
}

pub fn roll_solid_ellipsoid(m: f64, r: f64) -> f64 {
    2.0 / 5.0 * m * r.powi(2)
}

pub fn roll_solid_cylinder(m: f64, r: f64) -> f64 {
    m / 2.0 * r.powi(2)
}

pub fn roll_thin_frustum(m: f64, r1: f64, r2: f64) -> f64 {
    m / 2.0 * (r1.powi(2) + r2.powi(2))
}

pub fn roll_thin_cone(m: f64, r: f64) -> f64 {
    m / 2.0 * r.powi(2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    ThinRing { radius: f64 },
    ThinCylinder { radius: f64, height: f64 },
    ThinEllipsoid { radius: f64, height: f64 },
    ThinFrustum { r1: f64, r2: f64, height: f64 },
    ThinHemisphere { radius: f64 },
    ThinCone { radius: f64, height: f64 },
    SolidCylinder { radius: f64, height: f64 },
    SolidEllipsoid { radius: f64, height: f64 },
    // Along the centerline: no roll inertia.
    SolidRod { length: f64 },
}

impl Primitive {
    pub fn self_inertia(&self, mass: f64) -> f64 {
        match *self {
            Primitive::ThinRing { radius } => j0_thin_ring(mass, radius),
            Primitive::ThinCylinder { radius, height } => j0_thin_cylinder(mass, radius, height),
            Primitive::ThinEllipsoid { radius, height } => j0_thin_ellipsoid(mass, radius, height),
            Primitive::ThinFrustum { r1, r2, height } => j0_thin_frustum(mass, r1, r2, height),
            Primitive::ThinHemisphere { radius } => j0_thin_hemisphere(mass, radius),
            Primitive::ThinCone { radius, height } => j0_thin_cone(mass, radius, height),
            Primitive::SolidCylinder { radius, height } => j0_solid_cylinder(mass, radius, height),
            Primitive::SolidEllipsoid { radius, height } => {
                j0_solid_ellipsoid(mass, radius, height)
            }
            Primitive::SolidRod { length } => j0_solid_rod(mass, length),
        }
    }

    pub fn roll_inertia(&self, mass: f64) -> f64 {
        match *self {
            Primitive::ThinRing { radius } => roll_thin_ring(mass, radius),
            Primitive::ThinCylinder { radius, .. } => roll_thin_cylinder(mass, radius),
            Primitive::ThinEllipsoid { radius, height } => {
                roll_thin_ellipsoid(mass, radius, height)
            }
            Primitive::ThinFrustum { r1, r2, .. } => roll_thin_frustum(mass, r1, r2),
            Primitive::ThinHemisphere { radius } => roll_thin_hemisphere(mass, radius),
            Primitive::ThinCone { radius, .. } => roll_thin_cone(mass, radius),
            Primitive::SolidCylinder { radius, .. } => roll_solid_cylinder(mass, radius),
            Primitive::SolidEllipsoid { radius, .. } => roll_solid_ellipsoid(mass, radius),
            Primitive::SolidRod { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Point,
    Single(Primitive),
    AreaBlend {
        first: Primitive,
        first_area: f64,
        second: Primitive,
        second_area: f64,
    },
}

impl Shape {
    pub fn blend_weights(&self) -> Option<(f64, f64)> {
        match *self {
            Shape::AreaBlend {
                first_area,
                second_area,
                ..
            } => {
                let total = first_area + second_area;
                if total > 0.0 {
                    Some((first_area / total, second_area / total))
                } else {
                    None
                }
            }
            _ => Some((1.0, 0.0)),
        }
    }

    pub fn self_inertia(&self, mass: f64) -> Option<f64> {
        match self {
            Shape::Point => Some(0.0),
            Shape::Single(p) => Some(p.self_inertia(mass)),
            Shape::AreaBlend { first, second, .. } => {
                let (w1, w2) = self.blend_weights()?;
                Some(w1 * first.self_inertia(mass) + w2 * second.self_inertia(mass))
            }
        }
    }

    pub fn roll_inertia(&self, mass: f64) -> Option<f64> {
        match self {
            Shape::Point => Some(0.0),
            Shape::Single(p) => Some(p.roll_inertia(mass)),
            Shape::AreaBlend { first, second, .. } => {
                let (w1, w2) = self.blend_weights()?;
                Some(w1 * first.roll_inertia(mass) + w2 * second.roll_inertia(mass))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_thin_cylinder_self_inertia() {
        // 500 kg, r = 1 m, h = 2 m
        assert_abs_diff_eq!(
            j0_thin_cylinder(500.0, 1.0, 2.0),
            500.0 * (0.5 + 4.0 / 12.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_frustum_reduces_to_thin_cylinder_roll() {
        assert_abs_diff_eq!(
            roll_thin_frustum(10.0, 2.0, 2.0),
            roll_thin_cylinder(10.0, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_frustum_self_inertia_equal_radii() {
        // r1 = r2: r²/2 + h²/18 * 1.5 = r²/2 + h²/12
        assert_abs_diff_eq!(
            j0_thin_frustum(3.0, 1.5, 1.5, 2.0),
            j0_thin_cylinder(3.0, 1.5, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ellipsoidal_dome_roll_at_unit_aspect() {
        // h = r: 2/2 * (1 - 3/4 + 3/20)
        assert_abs_diff_eq!(roll_thin_ellipsoid(1.0, 1.0, 1.0), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_simple_roll_formulas() {
        assert_abs_diff_eq!(roll_thin_ring(2.0, 3.0), 18.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roll_thin_hemisphere(3.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roll_solid_ellipsoid(5.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roll_solid_cylinder(4.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roll_thin_cone(4.0, 1.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simple_self_formulas() {
        assert_abs_diff_eq!(j0_thin_ring(2.0, 1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(j0_thin_hemisphere(2.0, 3.0), 18.0, epsilon = 1e-12);
        assert_abs_diff_eq!(j0_solid_rod(12.0, 2.0), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(j0_solid_cylinder(12.0, 2.0, 1.0), 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(j0_thin_cone(36.0, 2.0, 3.0), 54.0, epsilon = 1e-12);
        assert_abs_diff_eq!(j0_thin_ellipsoid(5.0, 1.0, 1.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_area_blend_weights_by_area_not_mass() {
        let dome = Primitive::ThinEllipsoid {
            radius: 1.0,
            height: 0.5,
        };
        let cyl = Primitive::ThinCylinder {
            radius: 1.0,
            height: 3.0,
        };
        let blend = Shape::AreaBlend {
            first: dome,
            first_area: 1.0,
            second: cyl,
            second_area: 3.0,
        };
        let expected = 0.25 * dome.self_inertia(100.0) + 0.75 * cyl.self_inertia(100.0);
        assert_abs_diff_eq!(blend.self_inertia(100.0).unwrap(), expected, epsilon = 1e-9);
        // Linear in mass: blending equals splitting the mass between the parts.
        assert_abs_diff_eq!(
            blend.roll_inertia(100.0).unwrap(),
            dome.roll_inertia(25.0) + cyl.roll_inertia(75.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_area_blend_without_area_is_degenerate() {
        let blend = Shape::AreaBlend {
            first: Primitive::ThinRing { radius: 1.0 },
            first_area: 0.0,
            second: Primitive::ThinRing { radius: 1.0 },
            second_area: 0.0,
        };
        assert!(blend.self_inertia(1.0).is_none());
        assert!(blend.roll_inertia(1.0).is_none());
    }

    #[test]
    fn test_point_and_rod_have_no_roll() {
        assert_eq!(Shape::Point.roll_inertia(10.0), Some(0.0));
        assert_eq!(
            Shape::Single(Primitive::SolidRod { length: 4.0 }).roll_inertia(10.0),
            Some(0.0)
        );
    }
}
