use raylib::prelude::{Color, Vector2};
use crate::constants::*;
use crate::label::text_node::{Animation, TextNode, TextShadow};
use crate::surface::{fade, Glow, Surface};

/// Cycles through a fixed list of strings on demand and restyles its glow.
/// Nothing here runs per frame except the host's animation clock.
pub struct LabelEffect {
    index: usize,
    node: TextNode,
}

impl LabelEffect {
    pub fn new(color: Color) -> Self {
        let mut effect = Self {
            index: 0,
            node: TextNode::new(LABEL_TEXTS[0], color),
        };
        effect.set_color(color);
        effect
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.node.text
    }

    #[cfg(test)]
    pub fn color(&self) -> Color {
        self.node.color
    }

    #[cfg(test)]
    pub fn node(&self) -> &TextNode {
        &self.node
    }

    /// Shows the next string (wrapping) and restarts the flicker.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % LABEL_TEXTS.len();
        self.node.text = LABEL_TEXTS[self.index].to_string();

        self.node.set_animation(None);
        self.node.schedule_animation(Animation::flicker(), FLICKER_RESTART_DELAY);
        &self.node.text
    }

    pub fn set_color(&mut self, color: Color) {
        self.node.color = color;
        self.node.shadows = LABEL_SHADOW_BLURS
            .iter()
            .map(|&blur| TextShadow { blur, color })
            .collect();
    }

    pub fn tick(&mut self, dt: f32) {
        self.node.tick(dt);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        let size = surface.size();
        let width = surface.measure_text(&self.node.text, LABEL_FONT_SIZE);
        let position = Vector2::new((size.x - width) * 0.5, (size.y - LABEL_FONT_SIZE) * 0.5);
        let color = fade(self.node.color, self.node.opacity());

        surface.save();
        for shadow in self.node.shadows.iter().rev() {
            surface.set_glow(Some(Glow::new(shadow.color, shadow.blur)));
            surface.fill_text(&self.node.text, position, LABEL_FONT_SIZE, color);
        }
        surface.set_glow(None);
        surface.fill_text(&self.node.text, position, LABEL_FONT_SIZE, color);
        surface.restore();
    }
}
