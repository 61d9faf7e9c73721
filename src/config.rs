use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use raylib::prelude::Color;

use crate::constants::*;

#[derive(Debug, Clone)]
pub struct BallConfig {
    pub running: bool,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct RainConfig {
    pub running: bool,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct ShapeConfig {
    pub running: bool,
    pub size: f32,
}

/// The burst renderer has no run flag: it always runs.
#[derive(Debug, Clone)]
pub struct BurstConfig {
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct LabelConfig {
    pub color: Color,
}

/// Run flags and tunables, one section per animation. Each renderer only
/// ever sees its own section.
#[derive(Debug, Clone)]
pub struct Config {
    pub balls: BallConfig,
    pub rain: RainConfig,
    pub shapes: ShapeConfig,
    pub burst: BurstConfig,
    pub label: LabelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            balls: BallConfig { running: false, speed: 5.0 },
            rain: RainConfig { running: false, speed: 10.0 },
            shapes: ShapeConfig { running: false, size: 50.0 },
            burst: BurstConfig { count: 200 },
            label: LabelConfig { color: LABEL_COLORS[0] },
        }
    }
}

/// Neon animation wall: bouncing balls, matrix rain, pulsing shapes,
/// particle bursts and a glowing label.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Seed for every renderer's random generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// TTF/OTF font with katakana glyphs for the matrix rain
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Initial bouncing ball speed
    #[arg(long, default_value_t = 5.0)]
    pub ball_speed: f32,

    /// Initial matrix rain speed
    #[arg(long, default_value_t = 10.0)]
    pub rain_speed: f32,

    /// Initial geometric shape size
    #[arg(long, default_value_t = 50.0)]
    pub shape_size: f32,

    /// Particles per explosion
    #[arg(long, default_value_t = 200)]
    pub particle_count: usize,

    /// Neon label color, as #rrggbb
    #[arg(long, default_value = "#00ffff")]
    pub label_color: String,

    /// Start the balls, rain and shapes running
    #[arg(long)]
    pub autostart: bool,
}

impl Args {
    /// Fixed step for the label's animation clock. `--fps 0` leaves raylib
    /// uncapped, so the clock falls back to the default rate.
    pub fn frame_time(&self) -> f32 {
        if self.fps == 0 {
            FRAME_TIME
        } else {
            1.0 / self.fps as f32
        }
    }

    pub fn into_config(self) -> Result<Config> {
        let color = parse_hex_color(&self.label_color)
            .with_context(|| format!("Invalid --label-color '{}'", self.label_color))?;
        Ok(Config {
            balls: BallConfig { running: self.autostart, speed: self.ball_speed },
            rain: RainConfig { running: self.autostart, speed: self.rain_speed },
            shapes: ShapeConfig { running: self.autostart, size: self.shape_size },
            burst: BurstConfig { count: self.particle_count },
            label: LabelConfig { color },
        })
    }
}

/// Parses `#rrggbb` (the leading `#` is optional) into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("expected 6 hex digits, got '{}'", s);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("bad hex digits in '{}'", s))
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, 255))
}
