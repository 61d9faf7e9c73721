use rand::rngs::StdRng;
use raylib::prelude::{Color, Vector2};
use crate::config::RainConfig;
use crate::constants::*;
use crate::rain::drop::{random_speed, RainDrop};
use crate::renderer::Renderer;
use crate::state::LoopState;
use crate::surface::{fade, Surface};

/// Columns of glyphs falling down a surface that fades instead of clearing.
pub struct RainRenderer {
    drops: Vec<RainDrop>,
    alphabet: Vec<char>,
    bounds: Vector2,
    rng: StdRng,
    state: LoopState,
}

impl RainRenderer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            drops: Vec::new(),
            alphabet: RAIN_GLYPHS.chars().collect(),
            bounds: Vector2::new(0.0, 0.0),
            rng,
            state: LoopState::Uninitialized,
        }
    }

    #[cfg(test)]
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    /// Re-rolls every drop's speed in `[1, speed + 1)`.
    pub fn update_speed(&mut self, speed: f32) {
        for drop in self.drops.iter_mut() {
            drop.speed = random_speed(&mut self.rng, speed);
        }
    }
}

impl Renderer for RainRenderer {
    type Config = RainConfig;

    fn initialize(&mut self, surface: &dyn Surface, config: &RainConfig) {
        self.bounds = surface.size();
        let columns = (self.bounds.x / RAIN_COLUMN_WIDTH).floor().max(0.0) as usize;
        self.drops = (0..columns)
            .map(|i| {
                RainDrop::random(
                    &mut self.rng,
                    &self.alphabet,
                    i as f32 * RAIN_COLUMN_WIDTH,
                    self.bounds.y,
                    config.speed,
                )
            })
            .collect();
        self.state = LoopState::from_run_flag(config.running);
        log::debug!("Seeded {} rain columns", self.drops.len());
    }

    fn frame(&mut self, surface: &mut dyn Surface, config: &RainConfig) {
        if self.state == LoopState::Uninitialized {
            return;
        }
        self.state = LoopState::from_run_flag(config.running);
        if !config.running {
            return;
        }

        surface.fill_all(fade(Color::BLACK, RAIN_FADE));

        for drop in self.drops.iter_mut() {
            drop.update(&mut self.rng, &self.alphabet, self.bounds.y);
            drop.draw(surface);
        }
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

    fn setup() -> (RainRenderer, RecordingSurface, RainConfig) {
        let surface = RecordingSurface::new(210.0, 150.0);
        let config = RainConfig { running: true, speed: 10.0 };
        let mut renderer = RainRenderer::new(StdRng::seed_from_u64(5));
        renderer.initialize(&surface, &config);
        (renderer, surface, config)
    }

    #[test]
    fn one_drop_per_twenty_unit_column() {
        let (renderer, _, _) = setup();
        assert_eq!(renderer.drops().len(), 10);
        for (i, drop) in renderer.drops().iter().enumerate() {
            assert_eq!(drop.x, i as f32 * RAIN_COLUMN_WIDTH);
            assert!(drop.y >= 0.0 && drop.y < 150.0);
            assert!(drop.speed >= 1.0 && drop.speed < 11.0);
            assert_eq!(drop.glyphs.len(), RAIN_GLYPH_COUNT);
        }
    }

    #[test]
    fn glyph_strings_keep_their_length_and_reset_with_y() {
        let (mut renderer, mut surface, config) = setup();
        for _ in 0..600 {
            let before: Vec<(f32, Vec<char>)> =
                renderer.drops().iter().map(|d| (d.y, d.glyphs.clone())).collect();
            renderer.frame(&mut surface, &config);
            for (drop, (y, glyphs)) in renderer.drops().iter().zip(before) {
                assert_eq!(drop.glyphs.len(), RAIN_GLYPH_COUNT);
                if drop.y == 0.0 {
                    assert!(y + drop.speed > 150.0);
                } else {
                    assert_eq!(drop.glyphs, glyphs);
                    assert_eq!(drop.y, y + drop.speed);
                }
            }
            surface.take();
        }
    }

    #[test]
    fn frame_fades_instead_of_clearing() {
        let (mut renderer, mut surface, config) = setup();
        renderer.frame(&mut surface, &config);

        assert!(!surface.commands.iter().any(|c| matches!(c, Command::Clear)));
        match &surface.commands[0] {
            Command::Rect { points, color } => {
                assert_eq!((points[0].x, points[0].y), (0.0, 0.0));
                assert_eq!((points[1].x, points[1].y), (210.0, 150.0));
                assert_eq!((color.r, color.g, color.b, color.a), (0, 0, 0, 13));
            }
            other => panic!("expected fade rect, got {other:?}"),
        }
        assert_eq!(surface.texts().len(), 10 * RAIN_GLYPH_COUNT);
    }

    #[test]
    fn update_speed_rerolls_within_range() {
        let (mut renderer, _, _) = setup();
        let before: Vec<f32> = renderer.drops().iter().map(|d| d.speed).collect();
        renderer.update_speed(3.0);
        let after: Vec<f32> = renderer.drops().iter().map(|d| d.speed).collect();

        assert!(after.iter().all(|s| (1.0..4.0).contains(s)));
        assert_ne!(before, after);
    }

    #[test]
    fn paused_rain_draws_nothing() {
        let (mut renderer, mut surface, mut config) = setup();
        config.running = false;
        let ys: Vec<f32> = renderer.drops().iter().map(|d| d.y).collect();
        renderer.frame(&mut surface, &config);
        assert!(surface.commands.is_empty());
        assert_eq!(ys, renderer.drops().iter().map(|d| d.y).collect::<Vec<_>>());
        assert_eq!(renderer.state(), LoopState::Idle);
    }
}
