use nalgebra::Point3;

use super::body::RingSpec;
use crate::config::ORBIT_STEP_DEGREES;
use crate::math::geometry::circle_points;

#[derive(Debug, Clone)]
pub struct Ring {
    pub radius: f64,
    pub opacity: f32,
    pub points: Vec<Point3<f64>>,
}

/// Concentric rings around a planet. The band is derived from the planet's own
/// `RingSpec`, and every ring's points are rebuilt from scratch on each
/// `regenerate`.
#[derive(Debug, Clone)]
pub struct RingSet {
    spec: RingSpec,
    rings: Vec<Ring>,
}

impl RingSet {
    pub fn new(spec: RingSpec, num_rings: usize) -> Self {
        assert!(num_rings >= 1, "A ring set needs at least one ring");
        let rings = (0..num_rings)
            .map(|i| Ring {
                radius: 0.0,
                opacity: ring_opacity(i, num_rings),
                points: vec![],
            })
            .collect();
        RingSet { spec, rings }
    }

    pub fn spec(&self) -> &RingSpec {
        &self.spec
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Returns the (inner, outer) radius of the band for a planet of the given radius.
    pub fn band(&self, planet_radius: f64) -> (f64, f64) {
        (planet_radius * self.spec.inner, planet_radius * self.spec.outer)
    }

    pub fn regenerate(&mut self, center: &Point3<f64>, planet_radius: f64) {
        let (inner, outer) = self.band(planet_radius);
        let thickness = (outer - inner) / self.rings.len() as f64;
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.radius = inner + i as f64 * thickness;
            ring.points = circle_points(center, ring.radius, ORBIT_STEP_DEGREES);
        }
    }
}

// Rings fade out towards the outside
fn ring_opacity(i: usize, n: usize) -> f32 {
    0.7 - (i as f32 / n as f32) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const SATURN: RingSpec = RingSpec {
        inner: 1.2,
        outer: 2.0,
        color: [1.0, 1.0, 1.0],
    };
    const URANUS: RingSpec = RingSpec {
        inner: 1.1,
        outer: 2.5,
        color: [0.8, 0.8, 0.8],
    };

    #[test]
    fn test_radii_follow_own_spec() {
        let center = Point3::new(18.0, 0.0, 0.0);
        let mut saturn = RingSet::new(SATURN, 8);
        let mut uranus = RingSet::new(URANUS, 8);
        saturn.regenerate(&center, 0.9);
        uranus.regenerate(&center, 0.7);

        assert_relative_eq!(saturn.rings()[0].radius, 0.9 * 1.2);
        assert_relative_eq!(
            saturn.rings()[7].radius,
            0.9 * (1.2 + 7.0 * 0.1),
            epsilon = 1e-12
        );
        assert_relative_eq!(uranus.rings()[0].radius, 0.7 * 1.1);
        assert_relative_eq!(
            uranus.rings()[7].radius,
            0.7 * 1.1 + 7.0 * (0.7 * 1.4 / 8.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_regenerate_moves_points_with_center() {
        let mut rings = RingSet::new(SATURN, 8);
        rings.regenerate(&Point3::new(18.0, 0.0, 0.0), 0.9);
        rings.regenerate(&Point3::new(0.0, 0.0, 18.0), 0.9);

        for ring in rings.rings() {
            assert_eq!(ring.points.len(), 37);
            for p in ring.points.iter() {
                let d = p - Point3::new(0.0, 0.0, 18.0);
                assert_relative_eq!(d.norm(), ring.radius, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_opacity_fades() {
        let rings = RingSet::new(SATURN, 8);
        assert_relative_eq!(rings.rings()[0].opacity, 0.7);
        assert_relative_eq!(rings.rings()[4].opacity, 0.45, epsilon = 1e-6);
        let opacities: Vec<f32> = rings.rings().iter().map(|r| r.opacity).collect();
        assert!(opacities.windows(2).all(|w| w[0] > w[1]));
    }
}
