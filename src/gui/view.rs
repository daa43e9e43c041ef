use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use log::warn;
use nalgebra::{Point3, Translation3, UnitQuaternion, Vector3};

use super::camera::OrbitalCamera;
use super::renderer::SceneRenderer;
use crate::model::{BodyID, BodyInfo, OrbitalBody, Orrery};

/// Segments per orbit reference line.
const ORBIT_SEGMENTS: usize = 128;

/// Initial camera distance, far enough out to take in Jupiter's orbit.
const CAMERA_START_DISTANCE: f32 = 70.0;

pub struct View {
    // Object state
    orrery: Orrery,
    body_spheres: HashMap<BodyID, SceneNode>,
    orbit_paths: Vec<OrbitPath>,
    // Camera
    camera: OrbitalCamera,
    // Misc
    renderer: SceneRenderer,
}

/// A static polyline, pre-tilted into world space at setup.
struct OrbitPath {
    points: Vec<Point3<f32>>,
    color: Point3<f32>,
}

impl View {
    pub fn new(orrery: Orrery, window: &mut Window, assets_dir: PathBuf) -> Self {
        let camera = OrbitalCamera::new(CAMERA_START_DISTANCE);

        // The sun sits fixed at the origin
        let mut sun = window.add_sphere(orrery.primary().radius);
        apply_material(&mut sun, orrery.primary(), &assets_dir);

        // Each body gets a group node carrying the orbital-plane tilt, with
        // the sphere moving inside it, and a reference line tracing its orbit
        let mut body_spheres = HashMap::new();
        let mut orbit_paths = Vec::new();
        for body in orrery.bodies() {
            let sphere = Self::create_body_object(window, body, &assets_dir);
            body_spheres.insert(body.id, sphere);
            orbit_paths.push(Self::create_orbit_path(body));
        }

        let mut view = Self {
            orrery,
            body_spheres,
            orbit_paths,
            camera,
            renderer: SceneRenderer::new(),
        };
        view.update_scene_objects();

        view
    }

    fn create_body_object(window: &mut Window, body: &OrbitalBody, assets_dir: &Path) -> SceneNode {
        let mut group = window.add_group();
        group.set_local_rotation(tilt_as_quaternion(body));

        let mut sphere = group.add_sphere(body.info.radius);
        apply_material(&mut sphere, &body.info, assets_dir);
        sphere
    }

    fn create_orbit_path(body: &OrbitalBody) -> OrbitPath {
        let tilt = body.tilt();
        let points = body
            .ellipse()
            .sample_loop(ORBIT_SEGMENTS)
            .into_iter()
            .map(|p| nalgebra::convert(tilt * p))
            .collect();

        OrbitPath {
            points,
            color: Point3::new(0.53, 0.53, 0.53),
        }
    }

    /// Advances the model and moves scene objects to the right places.
    pub fn advance(&mut self, frames: f64) {
        self.orrery.advance(frames);
        self.update_scene_objects();
    }

    fn update_scene_objects(&mut self) {
        for (id, sphere) in self.body_spheres.iter_mut() {
            let body = self.orrery.get_body(*id);

            // The sphere lives inside the tilted group, so its translation
            // is the in-plane position and its spin axis is local z
            let position: Point3<f32> = nalgebra::convert(body.position_in_plane());
            sphere.set_local_translation(Translation3::from(position.coords));
            sphere.set_local_rotation(UnitQuaternion::from_axis_angle(
                &Vector3::z_axis(),
                body.spin() as f32,
            ));
        }
    }

    /// Re-submits the retained geometry: orbit reference lines and belt
    /// points. kiss3d's renderers clear their buffers every pass, so this
    /// runs once per frame.
    pub fn prerender_scene(&mut self) {
        for path in &self.orbit_paths {
            self.renderer.draw_polyline(&path.points, &path.color);
        }
        for belt in self.orrery.belts() {
            self.renderer.draw_points(belt.iter());
        }
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

fn tilt_as_quaternion(body: &OrbitalBody) -> UnitQuaternion<f32> {
    let tilt: nalgebra::Rotation3<f32> = nalgebra::convert(body.tilt());
    UnitQuaternion::from_rotation_matrix(&tilt)
}

/// Applies the body's flat color, then its texture when the image file is
/// actually present. A missing texture is only a cosmetic loss: the body
/// keeps its color and the session carries on.
fn apply_material(sphere: &mut SceneNode, info: &BodyInfo, assets_dir: &Path) {
    let color = &info.color;
    sphere.set_color(color.x, color.y, color.z);

    let name = match &info.texture {
        Some(name) => name,
        None => return,
    };
    let path = assets_dir.join(name);
    if path.is_file() {
        sphere.set_texture_from_file(&path, name);
    } else {
        warn!(
            "texture {} for {} not found; rendering with flat color",
            path.display(),
            info.name
        );
    }
}
