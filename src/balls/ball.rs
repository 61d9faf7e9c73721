use rand::Rng;
use raylib::core::math::lerp;
use raylib::prelude::{Color, Vector2};
use crate::constants::*;
use crate::surface::{Glow, Surface};

pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn random(rng: &mut impl Rng, bounds: Vector2, speed: f32) -> Self {
        let radius = rng.random_range(BALL_RADIUS_MIN..BALL_RADIUS_MAX);
        let (min_x, max_x) = axis_limits(radius, bounds.x);
        let (min_y, max_y) = axis_limits(radius, bounds.y);

        Self {
            position: Vector2::new(
                lerp(min_x, max_x, rng.random::<f32>()),
                lerp(min_y, max_y, rng.random::<f32>()),
            ),
            velocity: Vector2::new(
                (rng.random::<f32>() - 0.5) * speed,
                (rng.random::<f32>() - 0.5) * speed,
            ),
            radius,
            color: BALL_PALETTE[rng.random_range(0..BALL_PALETTE.len())],
        }
    }

    /// Moves the ball one frame and reflects it off the walls of `bounds`.
    pub fn update(&mut self, bounds: Vector2) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        let (min_x, max_x) = axis_limits(self.radius, bounds.x);
        if self.position.x <= min_x || self.position.x >= max_x {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(min_x, max_x);
        }

        let (min_y, max_y) = axis_limits(self.radius, bounds.y);
        if self.position.y <= min_y || self.position.y >= max_y {
            self.velocity.y = -self.velocity.y;
            self.position.y = self.position.y.clamp(min_y, max_y);
        }
    }

    /// Sets each velocity component to `speed`, keeping its sign. A component
    /// that is exactly zero has no direction and is left at zero.
    pub fn rescale_speed(&mut self, speed: f32) {
        if self.velocity.x != 0.0 {
            self.velocity.x = self.velocity.x.signum() * speed;
        }
        if self.velocity.y != 0.0 {
            self.velocity.y = self.velocity.y.signum() * speed;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_glow(Some(Glow::new(self.color, BALL_GLOW)));
        surface.fill_circle(self.position, self.radius, self.color);
        surface.restore();
    }
}

/// Range of valid centre coordinates along one axis. A surface narrower
/// than the ball pins it to the middle.
fn axis_limits(radius: f32, extent: f32) -> (f32, f32) {
    if extent >= radius * 2.0 {
        (radius, extent - radius)
    } else {
        (extent * 0.5, extent * 0.5)
    }
}
