use rand::rngs::StdRng;
use raylib::prelude::{Color, Vector2};
use crate::burst::particle::Particle;
use crate::config::BurstConfig;
use crate::constants::*;
use crate::renderer::Renderer;
use crate::state::LoopState;
use crate::surface::{fade, Surface};

/// Particle explosions with gravity and fade-out. Always running.
pub struct BurstRenderer {
    particles: Vec<Particle>,
    bounds: Vector2,
    rng: StdRng,
    state: LoopState,
}

impl BurstRenderer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            bounds: Vector2::new(0.0, 0.0),
            rng,
            state: LoopState::Uninitialized,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.bounds.x * 0.5, self.bounds.y * 0.5)
    }

    /// Adds `config.count` fresh particles at `(x, y)`.
    pub fn create_explosion(&mut self, x: f32, y: f32, config: &BurstConfig) {
        let origin = Vector2::new(x, y);
        self.particles.reserve(config.count);
        for _ in 0..config.count {
            self.particles.push(Particle::random(&mut self.rng, origin));
        }
        log::debug!("Explosion at ({x:.0}, {y:.0}), {} particles live", self.particles.len());
    }
}

impl BurstConfig {
    /// Only explosions triggered after this call use the new count.
    pub fn update_particle_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl Renderer for BurstRenderer {
    type Config = BurstConfig;

    fn initialize(&mut self, surface: &dyn Surface, _config: &BurstConfig) {
        self.bounds = surface.size();
        self.state = LoopState::Active;
    }

    fn frame(&mut self, surface: &mut dyn Surface, _config: &BurstConfig) {
        if self.state == LoopState::Uninitialized {
            return;
        }

        surface.fill_all(fade(Color::BLACK, BURST_FADE));

        self.particles.retain_mut(|particle| {
            let alive = particle.update();
            if alive {
                particle.draw(&mut *surface);
            }
            alive
        });
        log::trace!("{} particles live", self.particles.len());
    }

    fn state(&self) -> LoopState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Command, RecordingSurface};
    use rand::SeedableRng;

    fn setup() -> (BurstRenderer, RecordingSurface, BurstConfig) {
        let surface = RecordingSurface::new(400.0, 300.0);
        let config = BurstConfig { count: 200 };
        let mut renderer = BurstRenderer::new(StdRng::seed_from_u64(21));
        renderer.initialize(&surface, &config);
        (renderer, surface, config)
    }

    #[test]
    fn explosion_adds_exactly_the_configured_count() {
        let (mut renderer, mut surface, config) = setup();
        renderer.create_explosion(200.0, 150.0, &config);
        assert_eq!(renderer.particles().len(), 200);

        renderer.frame(&mut surface, &config);
        let live = renderer.particles().len();
        renderer.create_explosion(10.0, 10.0, &config);
        assert_eq!(renderer.particles().len(), live + 200);
    }

    #[test]
    fn new_particles_are_drawn_from_their_ranges() {
        let (mut renderer, _, config) = setup();
        renderer.create_explosion(50.0, 60.0, &config);
        for p in renderer.particles() {
            assert_eq!((p.position.x, p.position.y), (50.0, 60.0));
            assert!(p.velocity.x >= -5.0 && p.velocity.x < 5.0);
            assert!(p.velocity.y >= -5.0 && p.velocity.y < 5.0);
            assert!(p.decay >= 0.01 && p.decay < 0.03);
            assert!(p.size >= 2.0 && p.size < 7.0);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn life_never_increases_and_dead_particles_disappear() {
        let (mut renderer, mut surface, config) = setup();
        renderer.create_explosion(200.0, 150.0, &config);

        let mut frames = 0;
        while !renderer.particles().is_empty() {
            let before: Vec<f32> = renderer.particles().iter().map(|p| p.life).collect();
            let count = before.len();
            renderer.frame(&mut surface, &config);

            assert!(renderer.particles().len() <= count);
            assert!(renderer.particles().iter().all(|p| p.life > 0.0 && p.decay >= 0.0));
            let max_before = before.iter().cloned().fold(0.0, f32::max);
            assert!(renderer.particles().iter().all(|p| p.life < max_before));

            frames += 1;
            assert!(frames <= 101, "particles outlived their decay");
            surface.take();
        }
    }

    #[test]
    fn particle_opacity_follows_life() {
        let (mut renderer, mut surface, config) = setup();
        renderer.create_explosion(200.0, 150.0, &BurstConfig { count: 1 });
        renderer.frame(&mut surface, &config);

        let life = renderer.particles()[0].life;
        let circles = surface.circles();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].2.a, (255.0 * life).round() as u8);
        match &surface.commands[0] {
            Command::Rect { color, .. } => assert_eq!(color.a, 26),
            other => panic!("expected fade rect, got {other:?}"),
        }
    }

    #[test]
    fn count_change_affects_only_future_explosions() {
        let (mut renderer, _, mut config) = setup();
        renderer.create_explosion(0.0, 0.0, &config);
        config.update_particle_count(50);
        assert_eq!(renderer.particles().len(), 200);
        renderer.create_explosion(0.0, 0.0, &config);
        assert_eq!(renderer.particles().len(), 250);
    }

    #[test]
    fn runs_without_a_run_flag() {
        let (renderer, _, _) = setup();
        assert_eq!(renderer.state(), LoopState::Active);
        assert_eq!((renderer.center().x, renderer.center().y), (200.0, 150.0));
    }
}
