use rand::rngs::StdRng;
use raylib::prelude::Vector2;
use crate::config::ShapeConfig;
use crate::constants::*;
use crate::renderer::Renderer;
use crate::shapes::shape::Shape;
use crate::state::LoopState;
use crate::surface::Surface;

/// Rotating polygons whose size breathes with a per-shape phase.
pub struct ShapeRenderer {
    shapes: Vec<Shape>,
    time: f32,
    rng: StdRng,
    state: LoopState,
}

impl ShapeRenderer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            shapes: Vec::new(),
            time: 0.0,
            rng,
            state: LoopState::Uninitialized,
        }
    }

    #[cfg(test)]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[cfg(test)]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Sets every shape's base size; the pulse keeps running from there.
    pub fn update_size(&mut self, size: f32) {
        for shape in self.shapes.iter_mut() {
            shape.size = size;
        }
    }
}

impl Renderer for ShapeRenderer {
    type Config = ShapeConfig;

    fn initialize(&mut self, surface: &dyn Surface, config: &ShapeConfig) {
        let bounds: Vector2 = surface.size();
        self.shapes = (0..SHAPE_COUNT)
            .map(|_| Shape::random(&mut self.rng, bounds, config.size))
            .collect();
        self.state = LoopState::from_run_flag(config.running);
    }

    fn frame(&mut self, surface: &mut dyn Surface, config: &ShapeConfig) {
        if self.state == LoopState::Uninitialized {
            return;
        }
        self.state = LoopState::from_run_flag(config.running);
        if !config.running {
            return;
        }

        surface.clear();
        self.time += SHAPE_TIME_STEP;

        for (index, shape) in self.shapes.iter_mut().enumerate() {
            shape.update();
            let size = shape.render_size(self.time, index);
            shape.draw(surface, size);
        }
    }

    fn state(&self) -> LoopState {
        self.state
    }
}
