use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point2, Point3, Unit, Vector2, Vector3};

const KEY_CAMERA_MOVE_UP: Key = Key::W;
const KEY_CAMERA_MOVE_DOWN: Key = Key::S;
const KEY_CAMERA_MOVE_LEFT: Key = Key::A;
const KEY_CAMERA_MOVE_RIGHT: Key = Key::D;
const KEY_CAMERA_ZOOM_IN: Key = Key::Equals;
const KEY_CAMERA_ZOOM_OUT: Key = Key::Minus;

const KEY_ANGLE_STEP: f32 = 0.1;
const KEY_ZOOM_STEP: f32 = 1.2;

// A close cousin of ArcBall: drag to adjust pitch and yaw, scroll to zoom.
// The camera always points at the origin (the sun) and uses the y-axis as up,
// since the orbits all lie in the xz-plane. Unlike ArcBall, it can also be
// placed at an arbitrary eye position, which is what auto-rotation and
// "reset view" need.
pub struct OrbitCamera {
    // -- position --
    theta: f32,  // azimuthal angle, from +z towards +x
    phi: f32,    // polar angle, from +y
    radius: f32, // distance from origin
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    theta_step: f32,
    phi_step: f32,
    scroll_ratio: f32,
    phi_limit: f32,
    radius_limits: (f32, f32),
    z_near_multiplier: f32,
    z_far_multipler: f32,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        OrbitCamera {
            theta: 0.0,
            phi: PI / 2.0,
            radius: 1.0,
            width,
            height,
            fovy: PI / 3.0,
            last_cursor_pos: Vector2::zeros(),
            theta_step: 0.005,
            phi_step: 0.005,
            scroll_ratio: 1.2,
            phi_limit: 0.001,
            radius_limits: (1.0, 2000.0),
            z_near_multiplier: 0.01,
            z_far_multipler: 64.0,
        }
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.radius * self.z_near_multiplier,
            self.radius * self.z_far_multipler,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Distance at which `range` world units fill half of the screen height.
    pub fn distance_for_range(&self, range: f32) -> f32 {
        range / (self.fovy / 2.0).tan()
    }

    /// Moves the camera to `eye`, still looking at the origin.
    pub fn set_eye(&mut self, eye: &Point3<f32>) {
        let r = eye.coords.norm();
        if r == 0.0 {
            return;
        }
        self.radius = nalgebra::clamp(r, self.radius_limits.0, self.radius_limits.1);
        self.phi = nalgebra::clamp(
            (eye.y / r).acos(),
            self.phi_limit,
            PI - self.phi_limit,
        );
        self.theta = eye.x.atan2(eye.z);
    }

    pub fn rotate(&mut self, dtheta: f32, dphi: f32) {
        self.theta = (self.theta + dtheta) % (2.0 * PI);
        self.phi = nalgebra::clamp(self.phi + dphi, self.phi_limit, PI - self.phi_limit);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.radius = nalgebra::clamp(
            self.radius * factor,
            self.radius_limits.0,
            self.radius_limits.1,
        );
    }

    /// Projects a world point to framebuffer pixels, origin at the top left.
    /// Returns None for points behind the camera.
    pub fn screen_position(&self, point: &Point3<f32>) -> Option<Point2<f32>> {
        let clip = self.transformation() * point.to_homogeneous();
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Point2::new(
            (1.0 + ndc.x) * self.width as f32 / 2.0,
            (1.0 - ndc.y) * self.height as f32 / 2.0,
        ))
    }

    /// The ray from the eye through the given framebuffer pixel.
    pub fn ray_through(&self, pixel: &Point2<f32>) -> Option<(Point3<f32>, Unit<Vector3<f32>>)> {
        let ndc_x = 2.0 * pixel.x / self.width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * pixel.y / self.height as f32;

        let inverse = self.transformation().try_inverse()?;
        let near = inverse.transform_point(&Point3::new(ndc_x, ndc_y, -1.0));
        let far = inverse.transform_point(&Point3::new(ndc_x, ndc_y, 1.0));
        let dir = Unit::try_new(far - near, 1e-12)?;
        Some((self.eye(), dir))
    }
}

impl Camera for OrbitCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Rotate the opposite direction as the mouse moves (drag right == camera glides
                    // left)
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.rotate(-dpos.x * self.theta_step, -dpos.y * self.phi_step);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // scroll up == zoom in
                if off < 0.0 {
                    self.zoom(self.scroll_ratio);
                } else if off > 0.0 {
                    self.zoom(self.scroll_ratio.recip())
                }
            }
            WindowEvent::FramebufferSize(w, h) => {
                self.width = w;
                self.height = h;
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_UP, Action::Press, _) => {
                self.rotate(0.0, -KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_DOWN, Action::Press, _) => {
                self.rotate(0.0, KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_LEFT, Action::Press, _) => {
                self.rotate(-KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_RIGHT, Action::Press, _) => {
                self.rotate(KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_IN, Action::Press, _) => {
                self.zoom(KEY_ZOOM_STEP.recip())
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_OUT, Action::Press, _) => self.zoom(KEY_ZOOM_STEP),
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.projection().znear(), self.projection().zfar())
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
