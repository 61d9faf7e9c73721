use rand::Rng;
use raylib::prelude::{Color, Vector2};
use crate::constants::*;
use crate::surface::{Glow, Surface};

pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub color: Color,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, origin: Vector2) -> Self {
        Self {
            position: origin,
            velocity: Vector2::new(
                rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            ),
            life: 1.0,
            decay: rng.random_range(PARTICLE_DECAY_MIN..PARTICLE_DECAY_MAX),
            size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            color: PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())],
        }
    }

    /// Integrates one frame. Returns `false` once the particle has burnt out.
    pub fn update(&mut self) -> bool {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.velocity.y += PARTICLE_GRAVITY;
        self.life -= self.decay;

        if self.life <= 0.0 {
            self.life = 0.0;
            return false;
        }
        true
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_alpha(self.life);
        surface.set_glow(Some(Glow::new(self.color, PARTICLE_GLOW)));
        surface.fill_circle(self.position, self.size, self.color);
        surface.restore();
    }
}
