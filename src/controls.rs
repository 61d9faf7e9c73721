//! Control actions: the buttons, sliders and pickers of the wall, mapped 1:1
//! onto configuration writes and renderer calls.

use raylib::prelude::Color;

use crate::app::Renderers;
use crate::config::Config;
use crate::constants::LABEL_COLORS;

/// The three animations gated by a run flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Balls,
    Rain,
    Shapes,
}

impl Animation {
    /// Caption of the toggle button for the given run flag.
    pub fn button_caption(&self, running: bool) -> &'static str {
        match (self, running) {
            (Animation::Balls, true) => "Stop Animation",
            (Animation::Balls, false) => "Start Animation",
            (Animation::Rain, true) => "Stop Rain",
            (Animation::Rain, false) => "Start Rain",
            (Animation::Shapes, true) => "Stop Shapes",
            (Animation::Shapes, false) => "Start Shapes",
        }
    }

    pub fn is_running(&self, config: &Config) -> bool {
        match self {
            Animation::Balls => config.balls.running,
            Animation::Rain => config.rain.running,
            Animation::Shapes => config.shapes.running,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum UiAction {
    Toggle(Animation),
    SetBallSpeed(f32),
    SetRainSpeed(f32),
    SetShapeSize(f32),
    SetParticleCount(usize),
    /// Explosion at a point of the burst surface.
    Explode { x: f32, y: f32 },
    /// Explosion at the burst surface centre.
    ExplodeCenter,
    AdvanceLabel,
    SetLabelColor(Color),
}

/// A range input: values are stepped and clamped to `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    pub const BALL_SPEED: Slider = Slider { min: 1.0, max: 20.0, step: 1.0 };
    pub const RAIN_SPEED: Slider = Slider { min: 1.0, max: 30.0, step: 1.0 };
    pub const SHAPE_SIZE: Slider = Slider { min: 10.0, max: 150.0, step: 5.0 };
    pub const PARTICLE_COUNT: Slider = Slider { min: 50.0, max: 1000.0, step: 50.0 };

    pub fn increment(&self, value: f32) -> f32 {
        self.snap(value + self.step)
    }

    pub fn decrement(&self, value: f32) -> f32 {
        self.snap(value - self.step)
    }

    fn snap(&self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Color after `current` in the label picker palette.
pub fn next_label_color(current: Color) -> Color {
    let position = LABEL_COLORS
        .iter()
        .position(|c| (c.r, c.g, c.b) == (current.r, current.g, current.b));
    match position {
        Some(i) => LABEL_COLORS[(i + 1) % LABEL_COLORS.len()],
        None => LABEL_COLORS[0],
    }
}

/// Applies one control action. Values are taken as given; range limits
/// belong to the sliders.
pub fn apply(action: UiAction, config: &mut Config, renderers: &mut Renderers) {
    log::debug!("Control action {:?}", action);
    match action {
        UiAction::Toggle(Animation::Balls) => config.balls.running = !config.balls.running,
        UiAction::Toggle(Animation::Rain) => config.rain.running = !config.rain.running,
        UiAction::Toggle(Animation::Shapes) => config.shapes.running = !config.shapes.running,
        UiAction::SetBallSpeed(speed) => {
            config.balls.speed = speed;
            renderers.balls.update_speed(speed);
        }
        UiAction::SetRainSpeed(speed) => {
            config.rain.speed = speed;
            renderers.rain.update_speed(speed);
        }
        UiAction::SetShapeSize(size) => {
            config.shapes.size = size;
            renderers.shapes.update_size(size);
        }
        UiAction::SetParticleCount(count) => config.burst.update_particle_count(count),
        UiAction::Explode { x, y } => renderers.burst.create_explosion(x, y, &config.burst),
        UiAction::ExplodeCenter => {
            let center = renderers.burst.center();
            renderers.burst.create_explosion(center.x, center.y, &config.burst);
        }
        UiAction::AdvanceLabel => {
            let text = renderers.label.advance();
            log::info!("Neon label now reads '{}'", text);
        }
        UiAction::SetLabelColor(color) => {
            config.label.color = color;
            renderers.label.set_color(color);
        }
    }
}
