use rand::rngs::StdRng;
use raylib::prelude::Vector2;
use crate::balls::ball::Ball;
use crate::config::BallConfig;
use crate::constants::*;
use crate::renderer::Renderer;
use crate::state::LoopState;
use crate::surface::Surface;

/// Bouncing circles over a faint reference grid.
pub struct BallRenderer {
    balls: Vec<Ball>,
    bounds: Vector2,
    rng: StdRng,
    state: LoopState,
}

impl BallRenderer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            balls: Vec::new(),
            bounds: Vector2::new(0.0, 0.0),
            rng,
            state: LoopState::Uninitialized,
        }
    }

    #[cfg(test)]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn update_speed(&mut self, speed: f32) {
        for ball in self.balls.iter_mut() {
            ball.rescale_speed(speed);
        }
    }

    fn draw_grid(&self, surface: &mut dyn Surface) {
        let mut x = 0.0;
        while x < self.bounds.x {
            surface.stroke_line(Vector2::new(x, 0.0), Vector2::new(x, self.bounds.y), 1.0, GRID_COLOR);
            x += GRID_SPACING;
        }

        let mut y = 0.0;
        while y < self.bounds.y {
            surface.stroke_line(Vector2::new(0.0, y), Vector2::new(self.bounds.x, y), 1.0, GRID_COLOR);
            y += GRID_SPACING;
        }
    }
}

impl Renderer for BallRenderer {
    type Config = BallConfig;

    fn initialize(&mut self, surface: &dyn Surface, config: &BallConfig) {
        self.bounds = surface.size();
        self.balls = (0..BALL_COUNT)
            .map(|_| Ball::random(&mut self.rng, self.bounds, config.speed))
            .collect();
        self.state = LoopState::from_run_flag(config.running);
        log::debug!("Seeded {} balls on a {}x{} surface", self.balls.len(), self.bounds.x, self.bounds.y);
    }

    fn frame(&mut self, surface: &mut dyn Surface, config: &BallConfig) {
        if self.state == LoopState::Uninitialized {
            return;
        }
        self.state = LoopState::from_run_flag(config.running);
        if !config.running {
            return;
        }

        surface.clear();
        self.draw_grid(surface);

        for ball in self.balls.iter_mut() {
            ball.update(self.bounds);
            ball.draw(surface);
        }
    }

    fn state(&self) -> LoopState {
        self.state
    }
}
