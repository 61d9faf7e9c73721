use raylib::prelude::*;

use crate::config::Config;
use crate::controls::{next_label_color, Animation, Slider, UiAction};

/// Translates this frame's key presses into control actions. `pressed`
/// answers whether a key went down this frame.
pub fn key_actions(config: &Config, pressed: impl Fn(KeyboardKey) -> bool) -> Vec<UiAction> {
    let mut actions = Vec::new();

    if pressed(KeyboardKey::KEY_ONE) {
        actions.push(UiAction::Toggle(Animation::Balls));
    }
    if pressed(KeyboardKey::KEY_TWO) {
        actions.push(UiAction::Toggle(Animation::Rain));
    }
    if pressed(KeyboardKey::KEY_THREE) {
        actions.push(UiAction::Toggle(Animation::Shapes));
    }

    if pressed(KeyboardKey::KEY_Q) {
        actions.push(UiAction::SetBallSpeed(Slider::BALL_SPEED.increment(config.balls.speed)));
    }
    if pressed(KeyboardKey::KEY_A) {
        actions.push(UiAction::SetBallSpeed(Slider::BALL_SPEED.decrement(config.balls.speed)));
    }
    if pressed(KeyboardKey::KEY_W) {
        actions.push(UiAction::SetRainSpeed(Slider::RAIN_SPEED.increment(config.rain.speed)));
    }
    if pressed(KeyboardKey::KEY_S) {
        actions.push(UiAction::SetRainSpeed(Slider::RAIN_SPEED.decrement(config.rain.speed)));
    }
    if pressed(KeyboardKey::KEY_E) {
        actions.push(UiAction::SetShapeSize(Slider::SHAPE_SIZE.increment(config.shapes.size)));
    }
    if pressed(KeyboardKey::KEY_D) {
        actions.push(UiAction::SetShapeSize(Slider::SHAPE_SIZE.decrement(config.shapes.size)));
    }
    let count = config.burst.count as f32;
    if pressed(KeyboardKey::KEY_R) {
        actions.push(UiAction::SetParticleCount(Slider::PARTICLE_COUNT.increment(count) as usize));
    }
    if pressed(KeyboardKey::KEY_F) {
        actions.push(UiAction::SetParticleCount(Slider::PARTICLE_COUNT.decrement(count) as usize));
    }

    if pressed(KeyboardKey::KEY_SPACE) {
        actions.push(UiAction::ExplodeCenter);
    }
    if pressed(KeyboardKey::KEY_N) {
        actions.push(UiAction::AdvanceLabel);
    }
    if pressed(KeyboardKey::KEY_C) {
        actions.push(UiAction::SetLabelColor(next_label_color(config.label.color)));
    }

    actions
}

pub fn poll_keys(rl: &RaylibHandle, config: &Config) -> Vec<UiAction> {
    key_actions(config, |key| rl.is_key_pressed(key))
}
