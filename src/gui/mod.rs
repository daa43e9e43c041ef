use std::path::PathBuf;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::view::View;
use crate::model::Orrery;

mod camera;
mod renderer;
mod view;

/// Per-frame driver: advance the model by one frame, then refresh the scene
/// graph and re-submit the retained line/point geometry.
pub struct Simulation {
    view: View,
}

impl Simulation {
    pub fn new(orrery: Orrery, window: &mut Window, assets_dir: PathBuf) -> Self {
        Self {
            view: View::new(orrery, window, assets_dir),
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, _window: &mut Window) {
        self.view.advance(1.0);
        self.view.prerender_scene();
    }
}
