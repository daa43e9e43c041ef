use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, PointRenderer, Renderer};
use nalgebra::Point3;

/// Batches the non-mesh geometry: orbit reference lines and belt points.
///
/// Both sub-renderers clear their buffers after every pass, so the view
/// re-submits the (static) geometry each frame.
pub struct SceneRenderer {
    line_renderer: LineRenderer,
    point_renderer: PointRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        let mut point_renderer = PointRenderer::new();
        point_renderer.set_point_size(2.0);

        SceneRenderer {
            line_renderer: LineRenderer::new(),
            point_renderer,
        }
    }

    /// Draws a polyline as consecutive segments.
    pub fn draw_polyline(&mut self, points: &[Point3<f32>], color: &Point3<f32>) {
        for pts in points.windows(2) {
            self.line_renderer.draw_line(pts[0], pts[1], *color);
        }
    }

    pub fn draw_points<'a, I>(&mut self, points: I)
    where
        I: Iterator<Item = (&'a Point3<f32>, &'a Point3<f32>)>,
    {
        for (point, color) in points {
            self.point_renderer.draw_point(*point, *color);
        }
    }
}

impl Renderer for SceneRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.line_renderer.render(pass, camera);
        self.point_renderer.render(pass, camera);
    }
}
