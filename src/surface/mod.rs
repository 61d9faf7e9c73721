//! Immediate-mode 2D drawing surface shared by all renderers.
//!
//! A [`Surface`] behaves like a canvas context: primitives are given in local
//! coordinates, mapped through the current [`Transform`], and painted with the
//! current glow and global alpha. State is pushed and popped with
//! [`Surface::save`] / [`Surface::restore`].

use raylib::prelude::{Color, Vector2};

mod font;
mod panel;
#[cfg(test)]
pub mod recording;

pub use font::{load_font, PanelFont};
pub use panel::PanelSurface;

/// Soft halo drawn around a primitive (canvas `shadowColor` + `shadowBlur`).
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

impl Glow {
    pub fn new(color: Color, blur: f32) -> Self {
        Self { color, blur }
    }
}

/// 2D affine transform in canvas order: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn translate(&mut self, x: f32, y: f32) {
        self.e += self.a * x + self.c * y;
        self.f += self.b * x + self.d * y;
    }

    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    pub fn apply(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Length scale of the transform (rotation and translation keep it at 1).
    pub fn scale(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DrawState {
    pub transform: Transform,
    pub glow: Option<Glow>,
    pub alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self { transform: Transform::IDENTITY, glow: None, alpha: 1.0 }
    }
}

/// Current drawing state plus the states pushed by `save`.
#[derive(Debug, Default)]
pub struct DrawStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl DrawStack {
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn map(&self, p: Vector2) -> Vector2 {
        self.current.transform.apply(p)
    }

    /// Applies the global alpha to a color.
    pub fn paint(&self, color: Color) -> Color {
        fade(color, self.current.alpha)
    }
}

/// Multiplies the alpha channel of `color` by `alpha` (clamped to [0, 1]).
pub fn fade(color: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha).round() as u8)
}

/// 2D drawing context consumed by the renderers.
pub trait Surface {
    /// Drawable width and height.
    fn size(&self) -> Vector2;

    fn stack(&self) -> &DrawStack;
    fn stack_mut(&mut self) -> &mut DrawStack;

    /// Resets every pixel to transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vector2, size: Vector2, color: Color);
    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vector2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vector2], width: f32, color: Color);
    /// Draws `text` with its top-left corner at `position`.
    fn fill_text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color);
    fn measure_text(&self, text: &str, font_size: f32) -> f32;

    fn save(&mut self) {
        self.stack_mut().save();
    }

    fn restore(&mut self) {
        self.stack_mut().restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.stack_mut().current_mut().transform.translate(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.stack_mut().current_mut().transform.rotate(angle);
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.stack_mut().current_mut().glow = glow;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.stack_mut().current_mut().alpha = alpha;
    }

    /// Covers the whole surface with `color`, ignoring the current transform.
    fn fill_all(&mut self, color: Color) {
        let size = self.size();
        self.save();
        self.stack_mut().current_mut().transform = Transform::IDENTITY;
        self.fill_rect(Vector2::new(0.0, 0.0), size, color);
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translate_then_rotate_maps_like_canvas() {
        let mut t = Transform::IDENTITY;
        t.translate(10.0, 20.0);
        t.rotate(FRAC_PI_2);

        // Local +x points down the screen after a quarter turn.
        let p = t.apply(Vector2::new(5.0, 0.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 25.0, epsilon = 1e-4);
        assert_relative_eq!(t.scale(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn restore_returns_to_saved_state() {
        let mut stack = DrawStack::default();
        stack.save();
        stack.current_mut().alpha = 0.25;
        stack.current_mut().transform.translate(3.0, 4.0);
        stack.restore();

        assert_eq!(stack.current().alpha, 1.0);
        assert_eq!(stack.current().transform, Transform::IDENTITY);

        // Unbalanced restore keeps the current state.
        stack.current_mut().alpha = 0.5;
        stack.restore();
        assert_eq!(stack.current().alpha, 0.5);
    }

    #[test]
    fn fade_scales_alpha_channel() {
        let c = fade(Color::new(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 100));

        let c = fade(Color::new(0, 0, 0, 255), -1.0);
        assert_eq!(c.a, 0);
    }
}
