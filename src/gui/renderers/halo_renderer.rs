use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::{Point3, Vector3};

use super::utils::{draw_path, path_iter_parametric};

struct HaloData {
    pub center: Point3<f32>,
    pub radius: f32,
    pub color: Point3<f32>,
}

/// Draws circles that always face the camera, so that they read as the outline
/// of a sphere. Used for the sun's glow and for highlighting the inspected body.
pub struct HaloRenderer {
    line_renderer: LineRenderer,
    halos: Vec<HaloData>,
}

impl HaloRenderer {
    pub fn new() -> Self {
        HaloRenderer {
            line_renderer: LineRenderer::new(),
            halos: vec![],
        }
    }

    pub fn add_halo(&mut self, center: Point3<f32>, radius: f32, color: Point3<f32>) {
        let halo = HaloData {
            center,
            radius,
            color,
        };
        self.halos.push(halo);
    }

    fn load_halo_into_renderer(
        line_renderer: &mut LineRenderer,
        camera: &dyn Camera,
        halo: &HaloData,
    ) {
        // Transform the screen x and y vectors into world space
        let camera_transform = camera.view_transform().inverse();
        let x_vec = camera_transform.transform_vector(&Vector3::x()).normalize();
        let y_vec = camera_transform.transform_vector(&Vector3::y()).normalize();

        let f = |theta: f32| {
            let v = x_vec * theta.cos() + y_vec * theta.sin();
            halo.center + halo.radius * v
        };
        draw_path(
            line_renderer,
            path_iter_parametric(f, 0.0, std::f32::consts::TAU, 100),
            &halo.color,
        );
    }
}

impl Renderer for HaloRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        for halo in self.halos.iter() {
            HaloRenderer::load_halo_into_renderer(&mut self.line_renderer, camera, halo);
        }
        self.line_renderer.render(pass, camera);
        self.halos.clear();
    }
}
