use nalgebra::{Point3, Vector3};
use rand::Rng;

use super::trail::Trail;
use crate::config::{
    METEOR_RESET_X, METEOR_SOURCE_X, METEOR_SOURCE_YZ, METEOR_TRAIL_RETAIN, METEOR_VELOCITY_X,
    METEOR_VELOCITY_YZ,
};

/// A shooting star. Meteors are never destroyed; once one flies past the reset
/// bound it is moved back into the source band with a fresh trail.
#[derive(Debug, Clone)]
pub struct Meteor {
    position: Point3<f64>,
    velocity: Vector3<f64>,
    trail: Trail,
}

impl Meteor {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let velocity = Vector3::new(
            rng.gen_range(METEOR_VELOCITY_X.0..METEOR_VELOCITY_X.1),
            rng.gen_range(METEOR_VELOCITY_YZ.0..METEOR_VELOCITY_YZ.1),
            rng.gen_range(METEOR_VELOCITY_YZ.0..METEOR_VELOCITY_YZ.1),
        );
        Self::with_velocity(source_point(rng), velocity)
    }

    pub fn with_velocity(position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        let mut trail = Trail::new(1, METEOR_TRAIL_RETAIN);
        trail.record(position);
        Meteor {
            position,
            velocity,
            trail,
        }
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Moves the meteor one tick. Returns true if it was recycled.
    pub fn advance<R: Rng + ?Sized>(&mut self, time_speed: f64, rng: &mut R) -> bool {
        self.position += self.velocity * time_speed;

        let recycled = self.position.x > METEOR_RESET_X;
        if recycled {
            self.trail.clear();
            self.position = source_point(rng);
        }
        self.trail.record(self.position);
        recycled
    }
}

fn source_point<R: Rng + ?Sized>(rng: &mut R) -> Point3<f64> {
    Point3::new(
        rng.gen_range(METEOR_SOURCE_X.0..METEOR_SOURCE_X.1),
        rng.gen_range(METEOR_SOURCE_YZ.0..METEOR_SOURCE_YZ.1),
        rng.gen_range(METEOR_SOURCE_YZ.0..METEOR_SOURCE_YZ.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_source_band(p: &Point3<f64>) -> bool {
        (METEOR_SOURCE_X.0..METEOR_SOURCE_X.1).contains(&p.x)
            && (METEOR_SOURCE_YZ.0..METEOR_SOURCE_YZ.1).contains(&p.y)
            && (METEOR_SOURCE_YZ.0..METEOR_SOURCE_YZ.1).contains(&p.z)
    }

    #[test]
    fn test_spawn_in_source_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let meteor = Meteor::spawn(&mut rng);
            assert!(in_source_band(&meteor.position()));
            assert!(meteor.velocity().x >= 1.0 && meteor.velocity().x < 2.0);
        }
    }

    #[test]
    fn test_linear_translation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut meteor =
            Meteor::with_velocity(Point3::new(0.0, 1.0, 2.0), Vector3::new(1.5, 0.1, -0.1));
        assert!(!meteor.advance(2.0, &mut rng));
        assert_relative_eq!(meteor.position(), Point3::new(3.0, 1.2, 1.8), epsilon = 1e-12);
        assert_eq!(meteor.trail().len(), 2);
    }

    #[test]
    fn test_recycle_past_bound() {
        let mut rng = StdRng::seed_from_u64(2);
        let velocity = Vector3::new(2.0, 0.0, 0.0);
        let mut meteor = Meteor::with_velocity(Point3::new(49.0, 0.0, 0.0), velocity);
        assert!(meteor.advance(1.0, &mut rng));
        assert!(in_source_band(&meteor.position()));
        // Old trail is gone, only the respawn point remains
        assert_eq!(meteor.trail().len(), 1);
        // Velocity survives the respawn
        assert_relative_eq!(meteor.velocity(), velocity);
    }

    #[test]
    fn test_never_past_bound_after_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut meteor = Meteor::spawn(&mut rng);
        for _ in 0..1000 {
            meteor.advance(5.0, &mut rng);
            assert!(meteor.position().x <= METEOR_RESET_X);
        }
    }
}
