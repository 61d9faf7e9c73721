use rand::Rng;
use raylib::prelude::Vector2;
use crate::constants::*;
use crate::surface::{fade, Surface};

/// One falling column of glyphs. The head sits at `y`; the tail trails upward.
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub glyphs: Vec<char>,
}

impl RainDrop {
    pub fn random(rng: &mut impl Rng, alphabet: &[char], x: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y: rng.random::<f32>() * height,
            speed: random_speed(rng, speed),
            glyphs: random_glyphs(rng, alphabet),
        }
    }

    /// Advances the drop; returns `true` when it wrapped back to the top.
    pub fn update(&mut self, rng: &mut impl Rng, alphabet: &[char], height: f32) -> bool {
        self.y += self.speed;
        if self.y > height {
            self.y = 0.0;
            self.glyphs = random_glyphs(rng, alphabet);
            return true;
        }
        false
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let count = self.glyphs.len() as f32;
        let mut buf = [0u8; 4];
        for (i, glyph) in self.glyphs.iter().enumerate() {
            let alpha = 1.0 - i as f32 / count;
            let baseline = self.y - i as f32 * RAIN_GLYPH_SPACING;
            surface.fill_text(
                glyph.encode_utf8(&mut buf),
                Vector2::new(self.x, baseline - RAIN_FONT_SIZE),
                RAIN_FONT_SIZE,
                fade(RAIN_COLOR, alpha),
            );
        }
    }
}

/// Fall speed in `[1, speed + 1)`.
pub fn random_speed(rng: &mut impl Rng, speed: f32) -> f32 {
    rng.random::<f32>() * speed + 1.0
}

pub fn random_glyphs(rng: &mut impl Rng, alphabet: &[char]) -> Vec<char> {
    if alphabet.is_empty() {
        return vec![' '; RAIN_GLYPH_COUNT];
    }
    (0..RAIN_GLYPH_COUNT)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn wraps_to_top_with_new_glyphs() {
        let alphabet: Vec<char> = RAIN_GLYPHS.chars().collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut drop = RainDrop { x: 40.0, y: 95.0, speed: 10.0, glyphs: vec!['0'; RAIN_GLYPH_COUNT] };

        assert!(drop.update(&mut rng, &alphabet, 100.0));
        assert_eq!(drop.y, 0.0);
        assert_eq!(drop.glyphs.len(), RAIN_GLYPH_COUNT);
        assert!(drop.glyphs.iter().all(|g| alphabet.contains(g)));
        assert_ne!(drop.glyphs, vec!['0'; RAIN_GLYPH_COUNT]);
    }

    #[test]
    fn reaching_the_bottom_edge_exactly_does_not_wrap() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut drop = RainDrop { x: 0.0, y: 90.0, speed: 10.0, glyphs: vec!['1'; RAIN_GLYPH_COUNT] };
        assert!(!drop.update(&mut rng, &['a'], 100.0));
        assert_eq!(drop.y, 100.0);
    }

    #[test]
    fn tail_fades_linearly_from_the_head() {
        let mut surface = RecordingSurface::new(100.0, 400.0);
        let drop = RainDrop { x: 20.0, y: 300.0, speed: 1.0, glyphs: vec!['ア'; RAIN_GLYPH_COUNT] };
        drop.draw(&mut surface);

        let texts = surface.texts();
        assert_eq!(texts.len(), RAIN_GLYPH_COUNT);
        assert_eq!(texts[0].2.a, 255);
        assert_eq!(texts[10].2.a, 128);
        assert_eq!(texts[19].2.a, 13);
        assert_eq!(texts[1].1.y, 300.0 - RAIN_GLYPH_SPACING - RAIN_FONT_SIZE);
        assert_eq!(texts[0].0, "ア");
    }

    #[test]
    fn speed_range_starts_at_one() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let s = random_speed(&mut rng, 4.0);
            assert!((1.0..5.0).contains(&s));
        }
    }
}
