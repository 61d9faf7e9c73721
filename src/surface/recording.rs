//! In-memory [`Surface`] that records every primitive in surface space.

use raylib::prelude::{Color, Vector2};

use super::{DrawStack, Glow, Surface};

#[derive(Debug, Clone)]
pub enum Command {
    Clear,
    Rect { points: Vec<Vector2>, color: Color },
    Line { from: Vector2, to: Vector2, width: f32, color: Color },
    Circle { center: Vector2, radius: f32, color: Color, glow: Option<Glow> },
    Polygon { points: Vec<Vector2>, color: Color, glow: Option<Glow> },
    Outline { points: Vec<Vector2>, width: f32, color: Color, glow: Option<Glow> },
    Text { text: String, position: Vector2, font_size: f32, color: Color, glow: Option<Glow> },
}

pub struct RecordingSurface {
    size: Vector2,
    stack: DrawStack,
    pub commands: Vec<Command>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            stack: DrawStack::default(),
            commands: Vec::new(),
        }
    }

    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> Vec<(Vector2, f32, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Circle { center, radius, color, .. } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Vector2, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, position, color, .. } => Some((text.clone(), *position, *color)),
                _ => None,
            })
            .collect()
    }

    fn glow(&self) -> Option<Glow> {
        self.stack.current().glow
    }

    fn map_all(&self, points: &[Vector2]) -> Vec<Vector2> {
        points.iter().map(|&p| self.stack.map(p)).collect()
    }
}

impl Surface for RecordingSurface {
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
        self.commands.push(Command::Clear);
    }

    fn fill_rect(&mut self, origin: Vector2, size: Vector2, color: Color) {
        let points = self.map_all(&[origin, Vector2::new(origin.x + size.x, origin.y + size.y)]);
        let color = self.stack.paint(color);
        self.commands.push(Command::Rect { points, color });
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
        let (from, to) = (self.stack.map(from), self.stack.map(to));
        let color = self.stack.paint(color);
        self.commands.push(Command::Line { from, to, width, color });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        let center = self.stack.map(center);
        let color = self.stack.paint(color);
        let glow = self.glow();
        self.commands.push(Command::Circle { center, radius, color, glow });
    }

    fn fill_polygon(&mut self, points: &[Vector2], color: Color) {
        let points = self.map_all(points);
        let color = self.stack.paint(color);
        let glow = self.glow();
        self.commands.push(Command::Polygon { points, color, glow });
    }

    fn stroke_polygon(&mut self, points: &[Vector2], width: f32, color: Color) {
        let points = self.map_all(points);
        let color = self.stack.paint(color);
        let glow = self.glow();
        self.commands.push(Command::Outline { points, width, color, glow });
    }

    fn fill_text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color) {
        let position = self.stack.map(position);
        let color = self.stack.paint(color);
        let glow = self.glow();
        self.commands.push(Command::Text { text: text.to_string(), position, font_size, color, glow });
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * 0.6
    }
}
