use std::collections::HashMap;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation3, Unit, Vector3};

use super::camera::OrbitCamera;
use super::controller::HELP_TEXT;
use super::renderers::CompoundRenderer;
use crate::config::{DEFAULT_FORWARD, METEOR_RADIUS, SUN_COLOR, VIEW_RANGE};
use crate::math::geometry::eye_from_forward;
use crate::model::{BodyID, Controls, DrawList, Inspector, Layer, SolarSystem};

// Text sizes and offsets are in framebuffer pixels
const LABEL_TEXT_SIZE: f32 = 40.0;
const INFO_TEXT_SIZE: f32 = 44.0;
const HUD_TEXT_SIZE: f32 = 40.0;
const LABEL_OFFSET: (f32, f32) = (20.0, -20.0);
const HUD_RIGHT_MARGIN: f32 = 500.0;

/// Owns every kiss3d object in the scene, and keeps them in sync with the model.
pub struct View {
    // Scene objects, keyed by what they represent
    body_spheres: HashMap<BodyID, SceneNode>,
    meteor_spheres: Vec<SceneNode>,
    // Camera
    camera: OrbitCamera,
    // Misc
    renderer: CompoundRenderer,
    font: std::rc::Rc<Font>,
}

impl View {
    pub fn new(system: &SolarSystem, window: &mut Window) -> Self {
        let mut body_spheres = HashMap::new();
        for body in system.bodies() {
            let mut sphere = window.add_sphere(body.info.radius as f32);
            let color = &body.info.color;
            sphere.set_color(color.x, color.y, color.z);
            body_spheres.insert(body.id, sphere);
        }

        // Stars never move, so there's no need to hold on to them
        for star in system.stars() {
            let mut sphere = window.add_sphere(star.radius as f32);
            sphere.set_color(0.8, 0.8, 0.8);
            set_position_helper(&mut sphere, star.position);
        }

        let meteor_spheres = system
            .meteors()
            .iter()
            .map(|_| {
                let mut sphere = window.add_sphere(METEOR_RADIUS as f32);
                sphere.set_color(1.0, 1.0, 1.0);
                sphere
            })
            .collect();

        let mut view = View {
            body_spheres,
            meteor_spheres,
            camera: OrbitCamera::new(window.width(), window.height()),
            renderer: CompoundRenderer::new(),
            font: Font::default(),
        };
        view.reset_camera();
        view.update_scene_objects(system);
        view
    }

    /// Looks at the sun along the default direction, with the default range in view.
    pub fn reset_camera(&mut self) {
        let forward = Vector3::from(DEFAULT_FORWARD);
        let distance = self.camera.distance_for_range(VIEW_RANGE as f32) as f64;
        let eye: Point3<f32> = nalgebra::convert(eye_from_forward(&forward, distance));
        self.camera.set_eye(&eye);
    }

    pub fn follow_auto_rotation(&mut self, eye: Point3<f64>) {
        let eye: Point3<f32> = nalgebra::convert(eye);
        self.camera.set_eye(&eye);
    }

    /// The world-space ray under a cursor position.
    pub fn pick_ray(&self, cursor: &Point2<f32>) -> Option<(Point3<f64>, Unit<Vector3<f64>>)> {
        let (origin, dir) = self.camera.ray_through(cursor)?;
        let origin: Point3<f64> = nalgebra::convert(origin);
        let dir: Vector3<f64> = nalgebra::convert(dir.into_inner());
        Some((origin, Unit::new_normalize(dir)))
    }

    pub fn update_scene_objects(&mut self, system: &SolarSystem) {
        for (id, sphere) in self.body_spheres.iter_mut() {
            set_position_helper(sphere, system.get_body(*id).position());
        }

        for (meteor, sphere) in system.meteors().iter().zip(self.meteor_spheres.iter_mut()) {
            set_position_helper(sphere, meteor.position());
        }
    }

    // the big boy
    pub fn prerender_scene(
        &mut self,
        window: &mut Window,
        system: &SolarSystem,
        controls: &Controls,
        inspector: &Inspector,
        fps: f64,
    ) {
        let draw_list = DrawList::build(system, controls, inspector);

        for polyline in draw_list.polylines.iter() {
            self.renderer.draw_polyline(
                polyline.points.iter().map(|p| nalgebra::convert(*p)),
                polyline.color,
            );
        }

        // Glow around the sun, dimmed to stand in for its transparency
        let sun = system.sun();
        let glow_color = Point3::from(Vector3::from(SUN_COLOR) * 0.2);
        self.renderer.draw_halo(
            nalgebra::convert(sun.position()),
            system.glow_radius() as f32,
            glow_color,
        );

        if let Some(id) = inspector.selected() {
            let body = system.get_body(id);
            self.renderer.draw_halo(
                nalgebra::convert(body.position()),
                (body.info.radius * 1.3) as f32,
                white(),
            );
        }

        for label in draw_list.labels.iter() {
            let anchor: Point3<f32> = nalgebra::convert(label.anchor);
            let pixel = match self.camera.screen_position(&anchor) {
                Some(p) => p,
                None => continue,
            };
            let (pos, size) = match label.layer {
                Layer::Info => (pixel, INFO_TEXT_SIZE),
                _ => (
                    Point2::new(pixel.x + LABEL_OFFSET.0, pixel.y + LABEL_OFFSET.1),
                    LABEL_TEXT_SIZE,
                ),
            };
            window.draw_text(&label.text, &pos, size, &self.font, &white());
        }

        window.draw_text(
            &self.left_hand_text(controls),
            &Point2::origin(),
            HUD_TEXT_SIZE,
            &self.font,
            &white(),
        );
        window.draw_text(
            &self.time_summary_text(system, controls, fps),
            &Point2::new(self.camera.width() as f32 - HUD_RIGHT_MARGIN, 0.0),
            HUD_TEXT_SIZE,
            &self.font,
            &white(),
        );
    }

    fn left_hand_text(&self, controls: &Controls) -> String {
        format!(
            "{}
Simulation Speed: {:.1}
{}",
            controls.pause_caption(),
            controls.time_speed,
            HELP_TEXT,
        )
    }

    fn time_summary_text(&self, system: &SolarSystem, controls: &Controls, fps: f64) -> String {
        format!(
            "Time: {:.2}
Orbits: {}  Labels: {}
Trails: {}  Rotation: {}
FPS: {:.0}",
            system.time(),
            on_off(controls.orbits_visible),
            on_off(controls.labels_visible),
            on_off(controls.trails_enabled),
            on_off(controls.auto_rotate),
            fps,
        )
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}

// does some nice conversions
fn set_position_helper(obj: &mut SceneNode, position: Point3<f64>) {
    let position: Point3<f32> = nalgebra::convert(position);
    obj.set_local_translation(Translation3::from(position.coords));
}

fn white() -> Point3<f32> {
    Point3::new(1.0, 1.0, 1.0)
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
