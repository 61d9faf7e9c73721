use raylib::prelude::*;

use super::{fade, DrawStack, Glow, PanelFont, Surface};

const GLOW_LAYERS: usize = 4;
const TEXT_SPACING: f32 = 1.0;

/// Raylib backend for [`Surface`], drawing into whatever `RaylibDraw` handle
/// is active (usually a panel's render texture).
pub struct PanelSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
    size: Vector2,
    font: &'a PanelFont,
    stack: DrawStack,
}

impl<'a, D: RaylibDraw> PanelSurface<'a, D> {
    pub fn new(d: &'a mut D, width: f32, height: f32, font: &'a PanelFont) -> Self {
        Self {
            d,
            size: Vector2::new(width, height),
            font,
            stack: DrawStack::default(),
        }
    }

    /// Halo layers for the current glow: (spread, color) from the outside in.
    fn halo(&self, extra_alpha: f32) -> Vec<(f32, Color)> {
        let Some(Glow { color, blur }) = self.stack.current().glow else {
            return Vec::new();
        };
        let blur = blur * self.stack.current().transform.scale();
        (0..GLOW_LAYERS)
            .rev()
            .map(|i| {
                let t = (i + 1) as f32 / GLOW_LAYERS as f32;
                let alpha = 0.35 * (1.0 - t + 1.0 / GLOW_LAYERS as f32) * extra_alpha;
                (blur * t * 0.5, self.stack.paint(fade(color, alpha)))
            })
            .collect()
    }

    fn draw_triangle_any(&mut self, a: Vector2, b: Vector2, c: Vector2, color: Color) {
        // Raylib culls triangles that are not counter-clockwise on screen.
        let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        if cross < 0.0 {
            self.d.draw_triangle(a, b, c, color);
        } else {
            self.d.draw_triangle(a, c, b, color);
        }
    }

    fn draw_closed_outline(&mut self, points: &[Vector2], width: f32, color: Color) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.d.draw_line_ex(from, to, width, color);
            self.d.draw_circle_v(to, width * 0.5, color);
        }
    }

    fn draw_text_raw(&mut self, text: &str, position: Vector2, font_size: f32, color: Color) {
        self.d.draw_text_ex(self.font, text, position, font_size, TEXT_SPACING, color);
    }
}

impl<D: RaylibDraw> Surface for PanelSurface<'_, D> {
    fn size(&self) -> Vector2 {
        self.size
    }

    fn stack(&self) -> &DrawStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut DrawStack {
        &mut self.stack
    }

    fn clear(&mut self) {
        self.d.clear_background(Color::BLANK);
    }

    fn fill_rect(&mut self, origin: Vector2, size: Vector2, color: Color) {
        let corners = [
            origin,
            Vector2::new(origin.x + size.x, origin.y),
            Vector2::new(origin.x + size.x, origin.y + size.y),
            Vector2::new(origin.x, origin.y + size.y),
        ];
        self.fill_polygon(&corners, color);
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
        let from = self.stack.map(from);
        let to = self.stack.map(to);
        let scale = self.stack.current().transform.scale();
        for (spread, halo) in self.halo(1.0) {
            self.d.draw_line_ex(from, to, width * scale + spread * 2.0, halo);
        }
        let color = self.stack.paint(color);
        self.d.draw_line_ex(from, to, width * scale, color);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        let center = self.stack.map(center);
        let radius = radius * self.stack.current().transform.scale();
        for (spread, halo) in self.halo(1.0) {
            self.d.draw_circle_v(center, radius + spread, halo);
        }
        let color = self.stack.paint(color);
        self.d.draw_circle_v(center, radius, color);
    }

    fn fill_polygon(&mut self, points: &[Vector2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let mapped: Vec<Vector2> = points.iter().map(|&p| self.stack.map(p)).collect();
        for (spread, halo) in self.halo(color.a as f32 / 255.0) {
            self.draw_closed_outline(&mapped, spread * 2.0, halo);
        }
        let color = self.stack.paint(color);
        for i in 1..mapped.len() - 1 {
            self.draw_triangle_any(mapped[0], mapped[i], mapped[i + 1], color);
        }
    }

    fn stroke_polygon(&mut self, points: &[Vector2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let mapped: Vec<Vector2> = points.iter().map(|&p| self.stack.map(p)).collect();
        let width = width * self.stack.current().transform.scale();
        for (spread, halo) in self.halo(1.0) {
            self.draw_closed_outline(&mapped, width + spread * 2.0, halo);
        }
        let color = self.stack.paint(color);
        self.draw_closed_outline(&mapped, width, color);
    }

    fn fill_text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color) {
        let position = self.stack.map(position);
        for (spread, halo) in self.halo(1.0) {
            for (dx, dy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
                let offset = Vector2::new(position.x + dx * spread, position.y + dy * spread);
                self.draw_text_raw(text, offset, font_size, halo);
            }
        }
        let color = self.stack.paint(color);
        self.draw_text_raw(text, position, font_size, color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.font.measure(text, font_size, TEXT_SPACING).x
    }
}
