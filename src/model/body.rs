use nalgebra::Point3;

use crate::math::geometry::circle_point;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

/// Ring proportions, as multiples of the planet's rendered radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner: f64,
    pub outer: f64,
    pub color: [f32; 3],
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub kind: BodyKind,
    /// Radius as listed in the table, before scaling
    pub table_radius: f64,
    /// Radius the sphere is rendered and picked with
    pub radius: f64,
    pub color: Point3<f32>,
    /// Axial tilt, degrees
    pub tilt: f64,
    pub rings: Option<RingSpec>,
}

/// Uniform circular motion in the horizontal plane of the parent.
#[derive(Debug, Clone, Copy)]
pub struct CircularOrbit {
    pub parent: BodyID,
    pub distance: f64,
    /// Degrees per tick at unit time speed
    pub speed: f64,
    /// Degrees. Never wrapped; the trig functions take care of that.
    pub angle: f64,
}

impl CircularOrbit {
    pub fn advance(&mut self, time_speed: f64) {
        self.angle += self.speed * time_speed;
    }

    pub fn position_around(&self, parent_position: &Point3<f64>) -> Point3<f64> {
        circle_point(parent_position, self.distance, self.angle)
    }

    /// Orbital period in Earth years, since Earth moves at unit speed.
    pub fn period(&self) -> f64 {
        self.speed.recip()
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub orbit: Option<CircularOrbit>,
    pub(super) position: Point3<f64>,
}

impl Body {
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn angle(&self) -> Option<f64> {
        self.orbit.map(|o| o.angle)
    }

    pub fn parent_id(&self) -> Option<BodyID> {
        self.orbit.map(|o| o.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_orbit_advance_scales_with_speed() {
        let mut orbit = CircularOrbit {
            parent: BodyID(0),
            distance: 8.0,
            speed: 1.0,
            angle: 0.0,
        };
        for _ in 0..90 {
            orbit.advance(2.0);
        }
        assert_relative_eq!(orbit.angle, 180.0);

        let pos = orbit.position_around(&Point3::origin());
        assert_relative_eq!(pos, Point3::new(-8.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_around_moving_parent() {
        let orbit = CircularOrbit {
            parent: BodyID(3),
            distance: 0.7,
            speed: 7.0,
            angle: 90.0,
        };
        let parent = Point3::new(8.0, 0.0, 0.0);
        let pos = orbit.position_around(&parent);
        assert_relative_eq!(pos, Point3::new(8.0, 0.0, 0.7), epsilon = 1e-12);
        assert_relative_eq!((pos - parent).norm(), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_period_is_relative_to_earth() {
        let orbit = CircularOrbit {
            parent: BodyID(0),
            distance: 26.0,
            speed: 0.1,
            angle: 0.0,
        };
        assert_relative_eq!(orbit.period(), 10.0);
    }
}
