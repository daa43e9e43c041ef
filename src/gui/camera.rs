use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector2, Vector3};

const KEY_ORBIT_UP: Key = Key::W;
const KEY_ORBIT_DOWN: Key = Key::S;
const KEY_ORBIT_LEFT: Key = Key::A;
const KEY_ORBIT_RIGHT: Key = Key::D;
const KEY_ZOOM_IN: Key = Key::Equals;
const KEY_ZOOM_OUT: Key = Key::Minus;

const KEY_ANGLE_STEP: f32 = 0.1;
const KEY_ZOOM_STEP: f32 = 1.2;

const DRAG_ANGLE_PER_PIXEL: f32 = 0.005;
const SCROLL_ZOOM_RATIO: f32 = 1.2;

// Keep the pitch off the poles, where the up-vector becomes ambiguous
const PITCH_LIMIT: f32 = 0.001;

const DISTANCE_LIMITS: (f32, f32) = (1.0, 2000.0);

/// An arcball-style camera: always points at the origin, click-and-drag
/// adjusts yaw and pitch, scrolling zooms. The clipping planes scale with
/// the zoom distance so both a close-up of Mercury and the whole of Pluto's
/// orbit stay inside the frustum.
pub struct OrbitalCamera {
    // Spherical position around the origin
    yaw: f32,
    pitch: f32,
    distance: f32,
    // Perspective
    width: u32,
    height: u32,
    fovy: f32,
    // Drag tracking
    last_cursor_pos: Vector2<f32>,
}

impl OrbitalCamera {
    pub fn new(distance: f32) -> Self {
        OrbitalCamera {
            yaw: 0.0,
            pitch: PI / 2.0,
            distance: nalgebra::clamp(distance, DISTANCE_LIMITS.0, DISTANCE_LIMITS.1),
            width: 800,
            height: 600,
            fovy: PI / 4.0,
            last_cursor_pos: Vector2::zeros(),
        }
    }

    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw = (self.yaw + dyaw) % (2.0 * PI);
        self.pitch = nalgebra::clamp(self.pitch + dpitch, PITCH_LIMIT, PI - PITCH_LIMIT);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.distance = nalgebra::clamp(
            self.distance * factor,
            DISTANCE_LIMITS.0,
            DISTANCE_LIMITS.1,
        );
    }

    fn projection(&self) -> Perspective3<f32> {
        // Near and far planes track the zoom distance
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.distance * 0.01,
            self.distance * 1024.0,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }
}

impl Camera for OrbitalCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Drag right, camera glides left
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.rotate(-dpos.x * DRAG_ANGLE_PER_PIXEL, -dpos.y * DRAG_ANGLE_PER_PIXEL);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // Scroll up, zoom in
                if off < 0.0 {
                    self.zoom(SCROLL_ZOOM_RATIO);
                } else if off > 0.0 {
                    self.zoom(SCROLL_ZOOM_RATIO.recip())
                }
            }
            WindowEvent::FramebufferSize(w, h) => {
                self.width = w;
                self.height = h;
            }
            WindowEvent::Key(KEY_ORBIT_UP, Action::Press, _) => self.rotate(0.0, -KEY_ANGLE_STEP),
            WindowEvent::Key(KEY_ORBIT_DOWN, Action::Press, _) => self.rotate(0.0, KEY_ANGLE_STEP),
            WindowEvent::Key(KEY_ORBIT_LEFT, Action::Press, _) => self.rotate(-KEY_ANGLE_STEP, 0.0),
            WindowEvent::Key(KEY_ORBIT_RIGHT, Action::Press, _) => self.rotate(KEY_ANGLE_STEP, 0.0),
            WindowEvent::Key(KEY_ZOOM_IN, Action::Press, _) => self.zoom(KEY_ZOOM_STEP.recip()),
            WindowEvent::Key(KEY_ZOOM_OUT, Action::Press, _) => self.zoom(KEY_ZOOM_STEP),
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.distance * self.yaw.cos() * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.sin(),
            self.distance * self.pitch.cos(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::z())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation().try_inverse().unwrap()
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
