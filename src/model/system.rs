use std::collections::BTreeMap;

use nalgebra::{Point3, Vector3};
use rand::Rng;

use super::body::{Body, BodyID, BodyInfo, BodyKind, CircularOrbit};
use super::controls::Controls;
use super::meteor::Meteor;
use super::rings::RingSet;
use super::trail::Trail;
use crate::config::{
    active_table, ScaleTable, GLOW_RATIO, MOON_COLOR, MOON_HOST, MOON_NAME, MOON_ORBIT_RADIUS,
    MOON_RADIUS, MOON_SPEED, NUM_METEORS, NUM_RINGS, NUM_STARS, ORBIT_STEP_DEGREES,
    ROTATION_HEIGHT, ROTATION_RADIUS, ROTATION_SPEED, STAR_EXTENT, STAR_MIN_RADIUS,
    STAR_RADIUS_JITTER, SUN_COLOR, SUN_NAME, TIME_STEP, TRAIL_INTERVAL, TRAIL_RETAIN,
};
use crate::error::{Error, Result};
use crate::math::geometry::circle_points;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub position: Point3<f64>,
    pub radius: f64,
}

/// The whole simulated scene: bodies, their rings and trails, meteors, stars,
/// and the auto-rotation angle of the camera.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    // Invariant: bodies[i].id == BodyID(i), and every parent precedes its children
    bodies: Vec<Body>,
    rings: BTreeMap<BodyID, RingSet>,
    trails: BTreeMap<BodyID, Trail>,
    orbit_paths: BTreeMap<BodyID, Vec<Point3<f64>>>,
    meteors: Vec<Meteor>,
    stars: Vec<Star>,
    glow_radius: f64,
    time: f64,
    camera_angle: f64,
}

impl SolarSystem {
    /// Builds the scene from the table selected at build time.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::from_table(active_table(), rng)
    }

    pub fn from_table<R: Rng + ?Sized>(table: &ScaleTable, rng: &mut R) -> Result<Self> {
        let mut system = SolarSystem {
            bodies: vec![],
            rings: BTreeMap::new(),
            trails: BTreeMap::new(),
            orbit_paths: BTreeMap::new(),
            meteors: vec![],
            stars: vec![],
            glow_radius: table.sun_radius * GLOW_RATIO,
            time: 0.0,
            camera_angle: 0.0,
        };

        for _ in 0..NUM_STARS {
            let mut coord = || rng.gen_range(-STAR_EXTENT..STAR_EXTENT);
            let position = Point3::new(coord(), coord(), coord());
            let radius = STAR_MIN_RADIUS + rng.gen_range(0.0..STAR_RADIUS_JITTER);
            system.stars.push(Star { position, radius });
        }

        let sun = system.insert_body(
            BodyInfo {
                name: SUN_NAME.to_owned(),
                kind: BodyKind::Star,
                table_radius: table.sun_radius,
                radius: table.sun_radius,
                color: SUN_COLOR.into(),
                tilt: 0.0,
                rings: None,
            },
            None,
        );

        for row in table.planets.iter() {
            let orbit = CircularOrbit {
                parent: sun,
                distance: row.distance,
                speed: row.speed,
                angle: rng.gen_range(0.0..360.0),
            };
            let info = BodyInfo {
                name: row.name.to_owned(),
                kind: BodyKind::Planet,
                table_radius: row.radius,
                radius: row.radius * table.scale_factor,
                color: row.color.into(),
                tilt: row.tilt,
                rings: row.rings,
            };
            let id = system.insert_body(info, Some(orbit));

            let path = circle_points(&Point3::origin(), row.distance, ORBIT_STEP_DEGREES);
            system.orbit_paths.insert(id, path);
            system
                .trails
                .insert(id, Trail::new(TRAIL_INTERVAL, TRAIL_RETAIN));
            if let Some(spec) = row.rings {
                system.rings.insert(id, RingSet::new(spec, NUM_RINGS));
            }
        }

        let host = system
            .find_body(MOON_HOST)
            .ok_or_else(|| Error::MissingMoonHost(MOON_HOST.to_owned()))?
            .id;
        system.insert_body(
            BodyInfo {
                name: MOON_NAME.to_owned(),
                kind: BodyKind::Moon,
                table_radius: MOON_RADIUS,
                radius: MOON_RADIUS * table.scale_factor,
                color: MOON_COLOR.into(),
                tilt: 0.0,
                rings: None,
            },
            Some(CircularOrbit {
                parent: host,
                distance: MOON_ORBIT_RADIUS,
                speed: MOON_SPEED,
                angle: 0.0,
            }),
        );

        for _ in 0..NUM_METEORS {
            system.meteors.push(Meteor::spawn(rng));
        }

        system.update_positions();
        log::info!(
            "Built scene with {} bodies, {} ringed planets, {} stars, {} meteors",
            system.bodies.len(),
            system.rings.len(),
            system.stars.len(),
            system.meteors.len(),
        );
        Ok(system)
    }

    fn insert_body(&mut self, info: BodyInfo, orbit: Option<CircularOrbit>) -> BodyID {
        let id = BodyID(self.bodies.len());
        if let Some(orbit) = &orbit {
            assert!(orbit.parent < id, "Parent must be inserted before child");
        }
        self.bodies.push(Body {
            id,
            info,
            orbit,
            position: Point3::origin(),
        });
        id
    }

    // -- accessors --

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    /// Case-insensitive lookup by name.
    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| b.info.name.eq_ignore_ascii_case(name))
    }

    pub fn sun(&self) -> &Body {
        &self.bodies[0]
    }

    pub fn glow_radius(&self) -> f64 {
        self.glow_radius
    }

    pub fn rings(&self) -> impl Iterator<Item = (BodyID, &RingSet)> + '_ {
        self.rings.iter().map(|(id, r)| (*id, r))
    }

    pub fn trails(&self) -> impl Iterator<Item = (BodyID, &Trail)> + '_ {
        self.trails.iter().map(|(id, t)| (*id, t))
    }

    pub fn orbit_paths(&self) -> impl Iterator<Item = (BodyID, &[Point3<f64>])> + '_ {
        self.orbit_paths.iter().map(|(id, p)| (*id, p.as_slice()))
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    #[cfg(test)]
    pub(crate) fn meteors_mut(&mut self) -> &mut [Meteor] {
        &mut self.meteors
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn camera_angle(&self) -> f64 {
        self.camera_angle
    }

    /// Where the auto-rotating camera sits; it always looks at the origin.
    pub fn auto_rotation_eye(&self) -> Point3<f64> {
        Point3::new(
            ROTATION_RADIUS * self.camera_angle.sin(),
            ROTATION_HEIGHT,
            ROTATION_RADIUS * self.camera_angle.cos(),
        )
    }

    /// Anchor for text shown above a body.
    pub fn label_anchor(&self, id: BodyID) -> Point3<f64> {
        let body = self.get_body(id);
        body.position + Vector3::y() * (body.info.radius + 1.0)
    }

    // -- mutation --

    /// Places a body at the given angle and moves everything that depends on it.
    pub fn set_angle(&mut self, id: BodyID, degrees: f64) {
        if let Some(orbit) = self.bodies[id.0].orbit.as_mut() {
            orbit.angle = degrees;
        }
        self.update_positions();
    }

    /// Advances the scene by one tick. Does nothing while paused, except
    /// dropping planet trails that were switched off.
    pub fn tick<R: Rng + ?Sized>(&mut self, controls: &Controls, rng: &mut R) {
        if !controls.trails_enabled {
            for trail in self.trails.values_mut() {
                trail.clear();
            }
        }

        if !controls.running {
            return;
        }

        let time_speed = controls.time_speed;
        self.time += time_speed * TIME_STEP;

        for body in self.bodies.iter_mut() {
            if let Some(orbit) = body.orbit.as_mut() {
                orbit.advance(time_speed);
            }
        }
        self.update_positions();

        if controls.trails_enabled {
            for (id, trail) in self.trails.iter_mut() {
                trail.record(self.bodies[id.0].position);
            }
        }

        for (i, meteor) in self.meteors.iter_mut().enumerate() {
            if meteor.advance(time_speed, rng) {
                log::debug!("Meteor {} recycled at {:?}", i, meteor.position());
            }
        }

        if controls.auto_rotate {
            self.camera_angle += ROTATION_SPEED * time_speed;
        }
    }

    // Parents come first, so one pass in id order is enough
    fn update_positions(&mut self) {
        for i in 0..self.bodies.len() {
            let position = match self.bodies[i].orbit {
                None => Point3::origin(),
                Some(orbit) => orbit.position_around(&self.bodies[orbit.parent.0].position),
            };
            self.bodies[i].position = position;
        }

        for (id, rings) in self.rings.iter_mut() {
            let body = &self.bodies[id.0];
            rings.regenerate(&body.position, body.info.radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{METEOR_RESET_X, REALISTIC_SCALE, VISUAL_SCALE};
    use crate::model::Command;

    fn make_system() -> (SolarSystem, StdRng) {
        let mut rng = StdRng::seed_from_u64(1234);
        let system = SolarSystem::from_table(&VISUAL_SCALE, &mut rng).unwrap();
        (system, rng)
    }

    #[test]
    fn test_construction() {
        let (system, _) = make_system();
        assert_eq!(system.bodies().count(), 10);
        assert_eq!(system.sun().info.kind, BodyKind::Star);
        assert_eq!(system.stars().len(), NUM_STARS);
        assert_eq!(system.meteors().len(), NUM_METEORS);
        assert_eq!(system.orbit_paths().count(), 8);
        assert_eq!(system.rings().count(), 2);
        assert_relative_eq!(system.glow_radius(), 2.75);

        let moon = system.find_body("moon").unwrap();
        let earth = system.find_body("Earth").unwrap();
        assert_eq!(moon.parent_id(), Some(earth.id));

        for body in system.bodies() {
            if let Some(angle) = body.angle() {
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_construction_at_realistic_scale() {
        let mut rng = StdRng::seed_from_u64(1234);
        let system = SolarSystem::from_table(&REALISTIC_SCALE, &mut rng).unwrap();
        assert_eq!(system.bodies().count(), 10);
        assert_eq!(system.rings().count(), 2);
        assert_relative_eq!(system.glow_radius(), 109.2 * GLOW_RATIO);

        let moon = system.find_body("Moon").unwrap();
        let earth = system.find_body("Earth").unwrap();
        assert_eq!(moon.parent_id(), Some(earth.id));
        assert_relative_eq!(moon.info.radius, MOON_RADIUS * 5.0);
        assert_relative_eq!(
            (moon.position() - earth.position()).norm(),
            MOON_ORBIT_RADIUS,
            epsilon = 1e-9
        );

        let saturn = system.find_body("Saturn").unwrap();
        assert_relative_eq!(saturn.info.table_radius, 9.45);
        assert_relative_eq!(saturn.info.radius, 9.45 * 5.0);
        assert_relative_eq!(saturn.orbit.unwrap().distance, 9.58);
    }

    #[test]
    fn test_earth_half_turn() {
        let (mut system, mut rng) = make_system();
        let earth = system.find_body("Earth").unwrap().id;
        system.set_angle(earth, 0.0);

        let mut controls = Controls::default();
        controls.apply(Command::SetSpeed(2.0));
        for _ in 0..90 {
            system.tick(&controls, &mut rng);
        }

        let earth = system.get_body(earth);
        assert_relative_eq!(earth.angle().unwrap(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(
            earth.position(),
            Point3::new(-8.0, 0.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_angles_accumulate_and_radius_holds() {
        let (mut system, mut rng) = make_system();
        let controls = Controls::default();
        let start: Vec<Option<f64>> = system.bodies().map(|b| b.angle()).collect();

        let n = 250;
        for _ in 0..n {
            system.tick(&controls, &mut rng);
            for body in system.bodies() {
                if let Some(orbit) = body.orbit {
                    let parent = system.get_body(orbit.parent).position();
                    let r = (body.position() - parent).norm();
                    assert_relative_eq!(r, orbit.distance, epsilon = 1e-9);
                    assert_eq!(body.position().y, parent.y);
                }
            }
        }

        for (body, start) in system.bodies().zip(start) {
            if let (Some(orbit), Some(start)) = (body.orbit, start) {
                assert_relative_eq!(
                    orbit.angle,
                    start + n as f64 * orbit.speed,
                    epsilon = 1e-6
                );
            }
        }
        assert_relative_eq!(system.time(), n as f64 * TIME_STEP, epsilon = 1e-9);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let (mut system, mut rng) = make_system();
        let mut controls = Controls::default();
        system.tick(&controls, &mut rng);

        controls.apply(Command::TogglePause);
        let bodies: Vec<_> = system.bodies().map(|b| b.position()).collect();
        let meteors: Vec<_> = system.meteors().iter().map(|m| m.position()).collect();
        let time = system.time();
        for _ in 0..20 {
            system.tick(&controls, &mut rng);
        }
        assert_eq!(bodies, system.bodies().map(|b| b.position()).collect::<Vec<_>>());
        assert_eq!(
            meteors,
            system.meteors().iter().map(|m| m.position()).collect::<Vec<_>>()
        );
        assert_eq!(time, system.time());

        controls.apply(Command::TogglePause);
        system.tick(&controls, &mut rng);
        assert_ne!(bodies, system.bodies().map(|b| b.position()).collect::<Vec<_>>());
    }

    #[test]
    fn test_moon_follows_earth() {
        let (mut system, mut rng) = make_system();
        let controls = Controls::default();
        for _ in 0..37 {
            system.tick(&controls, &mut rng);
        }
        let earth = system.find_body("Earth").unwrap().position();
        let moon = system.find_body("Moon").unwrap();
        assert_relative_eq!(moon.angle().unwrap(), 37.0 * MOON_SPEED, epsilon = 1e-9);
        assert_relative_eq!(
            (moon.position() - earth).norm(),
            MOON_ORBIT_RADIUS,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rings_use_their_own_planet() {
        let (mut system, mut rng) = make_system();
        system.tick(&Controls::default(), &mut rng);

        for (id, rings) in system.rings() {
            let planet = system.get_body(id);
            let spec = planet.info.rings.unwrap();
            assert_eq!(*rings.spec(), spec);
            assert_relative_eq!(rings.rings()[0].radius, planet.info.radius * spec.inner);
            for p in rings.rings()[0].points.iter() {
                assert_relative_eq!(
                    (p - planet.position()).norm(),
                    rings.rings()[0].radius,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_meteors_stay_in_bounds() {
        let (mut system, mut rng) = make_system();
        let mut controls = Controls::default();
        controls.apply(Command::SetSpeed(5.0));
        for _ in 0..500 {
            system.tick(&controls, &mut rng);
            for meteor in system.meteors() {
                assert!(meteor.position().x <= METEOR_RESET_X);
            }
        }
    }

    #[test]
    fn test_trails_record_only_when_enabled() {
        let (mut system, mut rng) = make_system();
        let mut controls = Controls::default();
        controls.trails_enabled = false;
        for _ in 0..30 {
            system.tick(&controls, &mut rng);
        }
        assert!(system.trails().all(|(_, t)| t.is_empty()));

        controls.apply(Command::ToggleTrails);
        for _ in 0..30 {
            system.tick(&controls, &mut rng);
        }
        assert!(system.trails().all(|(_, t)| t.len() == 3));

        controls.apply(Command::ToggleTrails);
        system.tick(&controls, &mut rng);
        assert!(system.trails().all(|(_, t)| t.is_empty()));
    }

    #[test]
    fn test_auto_rotation() {
        let (mut system, mut rng) = make_system();
        let mut controls = Controls::default();
        controls.auto_rotate = false;
        system.tick(&controls, &mut rng);
        assert_eq!(system.camera_angle(), 0.0);
        assert_relative_eq!(system.auto_rotation_eye(), Point3::new(0.0, 15.0, 40.0));

        controls.apply(Command::ToggleRotation);
        for _ in 0..10 {
            system.tick(&controls, &mut rng);
        }
        assert_relative_eq!(system.camera_angle(), 0.5, epsilon = 1e-12);
        let eye = system.auto_rotation_eye();
        assert_relative_eq!(eye.y, 15.0);
        assert_relative_eq!(
            Vector3::new(eye.x, 0.0, eye.z).norm(),
            40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_label_anchor_above_body() {
        let (system, _) = make_system();
        let sun = system.sun().id;
        assert_relative_eq!(system.label_anchor(sun), Point3::new(0.0, 3.5, 0.0));
    }
}
