use nalgebra::Point3;

use super::controls::{Controls, Layer};
use super::pick::Inspector;
use super::system::SolarSystem;
use crate::config::ORBIT_COLOR;

#[derive(Debug, Clone)]
pub struct Polyline {
    pub layer: Layer,
    pub points: Vec<Point3<f64>>,
    pub color: Point3<f32>,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub layer: Layer,
    pub anchor: Point3<f64>,
    pub text: String,
}

/// Everything drawn with lines and text this frame, tagged by layer. The
/// spheres are long-lived scene nodes and aren't part of this.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub polylines: Vec<Polyline>,
    pub labels: Vec<Label>,
}

impl DrawList {
    pub fn build(system: &SolarSystem, controls: &Controls, inspector: &Inspector) -> Self {
        let mut list = DrawList::default();

        for (_, path) in system.orbit_paths() {
            list.push_polyline(
                controls,
                Layer::Orbits,
                path.to_vec(),
                ORBIT_COLOR.into(),
            );
        }

        for (id, rings) in system.rings() {
            let color: Point3<f32> = rings.spec().color.into();
            for ring in rings.rings() {
                // Fake the opacity by fading into the black background
                let faded = Point3::from(color.coords * ring.opacity);
                list.push_polyline(controls, Layer::Rings, ring.points.clone(), faded);
            }
            log::trace!("Drew {} rings for {:?}", rings.rings().len(), id);
        }

        for (id, trail) in system.trails() {
            let mut points: Vec<_> = trail.points().cloned().collect();
            // Close the gap between the last sample and the body itself
            points.push(system.get_body(id).position());
            let color = system.get_body(id).info.color;
            list.push_polyline(controls, Layer::Trails, points, color);
        }

        for meteor in system.meteors() {
            let points = meteor.trail().points().cloned().collect();
            list.push_polyline(
                controls,
                Layer::MeteorTrails,
                points,
                Point3::new(1.0, 1.0, 1.0),
            );
        }

        for (id, _) in system.orbit_paths() {
            let body = system.get_body(id);
            list.push_label(
                controls,
                Layer::Labels,
                body.position(),
                body.info.name.clone(),
            );
        }

        if let Some((anchor, text)) = inspector.info_label(system) {
            list.push_label(controls, Layer::Info, anchor, text);
        }

        list
    }

    fn push_polyline(
        &mut self,
        controls: &Controls,
        layer: Layer,
        points: Vec<Point3<f64>>,
        color: Point3<f32>,
    ) {
        // A single point isn't a line
        if !controls.is_visible(layer) || points.len() < 2 {
            return;
        }
        self.polylines.push(Polyline {
            layer,
            points,
            color,
        });
    }

    fn push_label(&mut self, controls: &Controls, layer: Layer, anchor: Point3<f64>, text: String) {
        if !controls.is_visible(layer) {
            return;
        }
        self.labels.push(Label {
            layer,
            anchor,
            text,
        });
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.polylines.iter().filter(|p| p.layer == layer).count()
            + self.labels.iter().filter(|l| l.layer == layer).count()
    }
}
