use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const GRID_COLUMNS: usize = 3;            // Panels per row
pub const GRID_ROWS: usize = 2;               // Panel rows
pub const TITLE_HEIGHT: f32 = 28.0;           // Height of a panel title bar

// Bouncing balls
pub const BALL_COUNT: usize = 5;
pub const BALL_RADIUS_MIN: f32 = 15.0;
pub const BALL_RADIUS_MAX: f32 = 25.0;
pub const BALL_GLOW: f32 = 20.0;
pub const GRID_SPACING: f32 = 20.0;
pub const GRID_COLOR: Color = Color::new(0, 255, 255, 26); // rgba(0, 255, 255, 0.1)
pub const BALL_PALETTE: [Color; 5] = [
    Color::new(0x00, 0xff, 0xff, 0xff),
    Color::new(0xff, 0x00, 0xff, 0xff),
    Color::new(0xff, 0xff, 0x00, 0xff),
    Color::new(0x00, 0xff, 0x00, 0xff),
    Color::new(0xff, 0x00, 0x80, 0xff),
];

// Matrix rain
pub const RAIN_COLUMN_WIDTH: f32 = 20.0;
pub const RAIN_GLYPH_SPACING: f32 = 20.0;
pub const RAIN_GLYPH_COUNT: usize = 20;
pub const RAIN_FONT_SIZE: f32 = 16.0;
pub const RAIN_FADE: f32 = 0.05;
pub const RAIN_COLOR: Color = Color::new(0, 255, 0, 255);
pub const RAIN_GLYPHS: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

// Geometric shapes
pub const SHAPE_COUNT: usize = 8;
pub const SHAPE_TIME_STEP: f32 = 0.02;
pub const SHAPE_ROTATION_SPEED: f32 = 0.05;    // Rotation speed is drawn from [-x, x)
pub const SHAPE_PULSE_AMPLITUDE: f32 = 0.3;
pub const SHAPE_GLOW: f32 = 15.0;
pub const SHAPE_LINE_WIDTH: f32 = 3.0;
pub const SHAPE_FILL_ALPHA: f32 = 0x20 as f32 / 255.0;
pub const SHAPE_PALETTE: [Color; 5] = [
    Color::new(0xff, 0x00, 0xff, 0xff),
    Color::new(0x00, 0xff, 0xff, 0xff),
    Color::new(0xff, 0xff, 0x00, 0xff),
    Color::new(0xff, 0x00, 0x80, 0xff),
    Color::new(0x00, 0xff, 0x80, 0xff),
];

// Particle burst
pub const PARTICLE_SPEED: f32 = 5.0;           // Velocity components are drawn from [-x, x)
pub const PARTICLE_GRAVITY: f32 = 0.1;
pub const PARTICLE_DECAY_MIN: f32 = 0.01;
pub const PARTICLE_DECAY_MAX: f32 = 0.03;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 7.0;
pub const PARTICLE_GLOW: f32 = 10.0;
pub const BURST_FADE: f32 = 0.1;
pub const PARTICLE_PALETTE: [Color; 6] = [
    Color::new(0xff, 0x00, 0xff, 0xff),
    Color::new(0x00, 0xff, 0xff, 0xff),
    Color::new(0xff, 0xff, 0x00, 0xff),
    Color::new(0xff, 0x00, 0x80, 0xff),
    Color::new(0x00, 0xff, 0x80, 0xff),
    Color::new(0xff, 0x80, 0x00, 0xff),
];

// Neon label
pub const LABEL_TEXTS: [&str; 8] = [
    "CYBER DREAMS",
    "NEON FUTURE",
    "DIGITAL REALM",
    "MATRIX CODE",
    "SYNTHWAVE",
    "RETRO WAVE",
    "CYBERPUNK",
    "NEON NIGHTS",
];
pub const LABEL_FONT_SIZE: f32 = 40.0;
pub const LABEL_SHADOW_BLURS: [f32; 4] = [5.0, 10.0, 15.0, 20.0];
pub const FLICKER_ANIMATION: &str = "neonFlicker";
pub const FLICKER_DURATION: f32 = 2.0;        // One direction of the alternating flicker (seconds)
pub const FLICKER_RESTART_DELAY: f32 = 0.01;  // Gap between clearing and re-applying the animation (seconds)
pub const LABEL_COLORS: [Color; 6] = [
    Color::new(0x00, 0xff, 0xff, 0xff),
    Color::new(0xff, 0x00, 0xff, 0xff),
    Color::new(0xff, 0xff, 0x00, 0xff),
    Color::new(0x00, 0xff, 0x00, 0xff),
    Color::new(0xff, 0x00, 0x80, 0xff),
    Color::new(0xff, 0x80, 0x00, 0xff),
];

// Title hover "glitch" style
pub const GLITCH_OFFSET: f32 = 2.0;
pub const GLITCH_GLOW: f32 = 20.0;
pub const GLITCH_LEAN: f32 = 2.0;
pub const TITLE_FONT_SIZE: f32 = 20.0;
