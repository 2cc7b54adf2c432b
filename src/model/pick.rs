use std::collections::HashMap;

use nalgebra::{Point3, Unit, Vector3};

use super::body::{BodyID, BodyKind};
use super::system::SolarSystem;
use crate::config::METEOR_RADIUS;
use crate::math::geometry::ray_sphere_intersection;

const SUN_INFO: &str = "Sun
The center of our solar system
Diameter: 1,391,000 km
Surface Temperature: 5,500°C";

/// What a clicked body turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspectable {
    Sun,
    Planet(BodyID),
    Moon { id: BodyID, host: BodyID },
}

/// Maps the things that can be clicked to the entity they describe, and keeps
/// track of the info label.
pub struct Inspector {
    targets: HashMap<BodyID, Inspectable>,
    selected: Option<BodyID>,
}

impl Inspector {
    pub fn new(system: &SolarSystem) -> Self {
        let targets = system
            .bodies()
            .map(|body| {
                let target = match (body.info.kind, body.parent_id()) {
                    (BodyKind::Star, _) => Inspectable::Sun,
                    (BodyKind::Moon, Some(host)) => Inspectable::Moon { id: body.id, host },
                    _ => Inspectable::Planet(body.id),
                };
                (body.id, target)
            })
            .collect();

        Inspector {
            targets,
            selected: None,
        }
    }

    /// Returns the nearest body hit by the ray, if any. A meteor or a background
    /// star in front of that body blocks the click.
    pub fn hit_test(
        &self,
        system: &SolarSystem,
        origin: &Point3<f64>,
        dir: &Unit<Vector3<f64>>,
    ) -> Option<BodyID> {
        let (t, id) = system
            .bodies()
            .filter(|b| self.targets.contains_key(&b.id))
            .filter_map(|b| {
                ray_sphere_intersection(origin, dir, &b.position(), b.info.radius).map(|t| (t, b.id))
            })
            .min_by(|(t1, _), (t2, _)| t1.total_cmp(t2))?;

        let meteors = system
            .meteors()
            .iter()
            .map(|m| (m.position(), METEOR_RADIUS));
        let stars = system.stars().iter().map(|s| (s.position, s.radius));
        let blocked = meteors
            .chain(stars)
            .filter_map(|(center, radius)| ray_sphere_intersection(origin, dir, &center, radius))
            .any(|t_other| t_other < t);
        if blocked {
            return None;
        }
        Some(id)
    }

    /// Handles a click: the label is hidden first, then shown again only if
    /// something was hit.
    pub fn click(
        &mut self,
        system: &SolarSystem,
        origin: &Point3<f64>,
        dir: &Unit<Vector3<f64>>,
    ) -> Option<Inspectable> {
        self.selected = self.hit_test(system, origin, dir);
        let target = self.selected.map(|id| self.targets[&id]);
        log::debug!("Click picked {:?}", target);
        target
    }

    pub fn selected(&self) -> Option<BodyID> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Text and position of the info label, re-anchored to wherever the selected
    /// body is now.
    pub fn info_label(&self, system: &SolarSystem) -> Option<(Point3<f64>, String)> {
        let id = self.selected?;
        Some((system.label_anchor(id), self.info_text(system, id)))
    }

    pub fn info_text(&self, system: &SolarSystem, id: BodyID) -> String {
        match self.targets[&id] {
            Inspectable::Sun => SUN_INFO.to_owned(),
            Inspectable::Planet(id) => {
                let body = system.get_body(id);
                let (distance, period) = body
                    .orbit
                    .map(|o| (o.distance, o.period()))
                    .unwrap_or_default();
                format!(
                    "{}
Distance from Sun: {} units
Diameter: {} units
Orbital Period: {:.2} Earth years",
                    body.info.name,
                    distance,
                    body.info.table_radius * 2.0,
                    period,
                )
            }
            Inspectable::Moon { id, host } => {
                let body = system.get_body(id);
                let distance = body.orbit.map(|o| o.distance).unwrap_or_default();
                format!(
                    "{}
Orbiting: {}
Orbit radius: {} units",
                    body.info.name,
                    system.get_body(host).info.name,
                    distance,
                )
            }
        }
    }
}
