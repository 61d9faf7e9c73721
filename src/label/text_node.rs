use raylib::prelude::Color;
use crate::constants::*;

#[derive(Debug, Clone, Copy)]
pub struct TextShadow {
    pub blur: f32,
    pub color: Color,
}

/// A named, infinitely alternating ease-in-out animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: &'static str,
    pub duration: f32,
    elapsed: f32,
}

impl Animation {
    pub fn flicker() -> Self {
        Self { name: FLICKER_ANIMATION, duration: FLICKER_DURATION, elapsed: 0.0 }
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Opacity in [0.75, 1.0]; runs from full to dim and back again.
    pub fn intensity(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let phase = self.elapsed / self.duration;
        let cycle = phase.floor();
        let mut t = phase - cycle;
        if cycle as i64 % 2 == 1 {
            t = 1.0 - t;
        }
        let eased = t * t * (3.0 - 2.0 * t);
        1.0 - 0.25 * eased
    }
}

/// The displayed label: text plus the style properties the effect writes.
#[derive(Debug, Clone)]
pub struct TextNode {
    pub text: String,
    pub color: Color,
    pub shadows: Vec<TextShadow>,
    animation: Option<Animation>,
    pending: Option<(Animation, f32)>,
}

impl TextNode {
    pub fn new(text: &str, color: Color) -> Self {
        Self {
            text: text.to_string(),
            color,
            shadows: Vec::new(),
            animation: Some(Animation::flicker()),
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
        self.pending = None;
    }

    /// Applies `animation` once `delay` seconds of host time have passed.
    pub fn schedule_animation(&mut self, animation: Animation, delay: f32) {
        self.pending = Some((animation, delay));
    }

    /// Host animation clock.
    pub fn tick(&mut self, dt: f32) {
        if let Some(animation) = self.animation.as_mut() {
            animation.elapsed += dt;
        }
        if let Some((animation, delay)) = self.pending.take() {
            let remaining = delay - dt;
            if remaining <= 0.0 {
                log::trace!("Animation '{}' applied to '{}'", animation.name, self.text);
                self.animation = Some(animation);
            } else {
                self.pending = Some((animation, remaining));
            }
        }
    }

    pub fn opacity(&self) -> f32 {
        self.animation.as_ref().map_or(1.0, Animation::intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flicker_alternates_between_full_and_dim() {
        let mut animation = Animation::flicker();
        assert_relative_eq!(animation.intensity(), 1.0);
        animation.elapsed = FLICKER_DURATION;
        assert_relative_eq!(animation.intensity(), 0.75);
        animation.elapsed = FLICKER_DURATION * 2.0;
        assert_relative_eq!(animation.intensity(), 1.0);
        animation.elapsed = FLICKER_DURATION * 0.5;
        assert_relative_eq!(animation.intensity(), 0.875);
    }

    #[test]
    fn scheduled_animation_applies_after_delay() {
        let mut node = TextNode::new("X", Color::WHITE);
        node.set_animation(None);
        node.schedule_animation(Animation::flicker(), 0.01);
        assert!(node.animation().is_none());
        assert_eq!(node.opacity(), 1.0);

        node.tick(0.004);
        assert!(node.animation().is_none());
        node.tick(0.01);
        assert_eq!(node.animation().map(|a| a.elapsed()), Some(0.0));
        assert_eq!(node.animation().map(|a| a.name), Some(FLICKER_ANIMATION));
    }
}
