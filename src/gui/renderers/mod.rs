use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::Point3;

use self::halo_renderer::HaloRenderer;

mod halo_renderer;
mod utils;

/// Collects everything drawn with lines this frame, and renders it in one go.
pub struct CompoundRenderer {
    halo_renderer: HaloRenderer,
    line_renderer: LineRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            halo_renderer: HaloRenderer::new(),
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_polyline<I: IntoIterator<Item = Point3<f32>>>(
        &mut self,
        points: I,
        color: Point3<f32>,
    ) {
        utils::draw_path(&mut self.line_renderer, points.into_iter(), &color);
    }

    pub fn draw_halo(&mut self, center: Point3<f32>, radius: f32, color: Point3<f32>) {
        self.halo_renderer.add_halo(center, radius, color);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.halo_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
