use std::f32::consts::{PI, TAU};
use rand::Rng;
use raylib::prelude::{Color, Vector2};
use crate::constants::*;
use crate::surface::{fade, Glow, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Square,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Hexagon];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Vertices centred on the origin for the given size.
    pub fn outline(&self, size: f32) -> Vec<Vector2> {
        match self {
            // Equilateral, apex up
            ShapeKind::Triangle => vec![
                Vector2::new(0.0, -size),
                Vector2::new(-size * 0.866, size * 0.5),
                Vector2::new(size * 0.866, size * 0.5),
            ],
            ShapeKind::Square => {
                let h = size * 0.5;
                vec![
                    Vector2::new(-h, -h),
                    Vector2::new(h, -h),
                    Vector2::new(h, h),
                    Vector2::new(-h, h),
                ]
            }
            ShapeKind::Hexagon => (0..6)
                .map(|i| {
                    let angle = i as f32 * PI / 3.0;
                    Vector2::new(angle.cos() * size, angle.sin() * size)
                })
                .collect(),
        }
    }
}

/// Size multiplier for shape `index` at accumulated time `time`, in [0.7, 1.3].
pub fn pulse(time: f32, index: usize) -> f32 {
    (time + index as f32).sin() * SHAPE_PULSE_AMPLITUDE + 1.0
}

pub struct Shape {
    pub position: Vector2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Color,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn random(rng: &mut impl Rng, bounds: Vector2, size: f32) -> Self {
        Self {
            position: Vector2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y),
            size,
            rotation: rng.random::<f32>() * TAU,
            rotation_speed: rng.random_range(-SHAPE_ROTATION_SPEED..SHAPE_ROTATION_SPEED),
            color: SHAPE_PALETTE[rng.random_range(0..SHAPE_PALETTE.len())],
            kind: ShapeKind::random(rng),
        }
    }

    pub fn update(&mut self) {
        self.rotation += self.rotation_speed;
    }

    pub fn render_size(&self, time: f32, index: usize) -> f32 {
        self.size * pulse(time, index)
    }

    pub fn draw(&self, surface: &mut dyn Surface, size: f32) {
        let points = self.kind.outline(size);

        surface.save();
        surface.translate(self.position.x, self.position.y);
        surface.rotate(self.rotation);
        surface.set_glow(Some(Glow::new(self.color, SHAPE_GLOW)));
        surface.fill_polygon(&points, fade(self.color, SHAPE_FILL_ALPHA));
        surface.stroke_polygon(&points, SHAPE_LINE_WIDTH, self.color);
        surface.restore();
    }
}
