use anyhow::{anyhow, Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod app;
mod balls;
mod burst;
mod config;
mod constants;
mod controls;
mod input;
mod label;
mod layout;
mod rain;
mod renderer;
mod shapes;
mod state;
mod surface;

use crate::app::{App, PanelId};
use crate::config::Args;
use crate::constants::*;
use crate::layout::Layout;
use crate::surface::{PanelFont, PanelSurface};

const BACKGROUND: Color = Color::new(10, 0, 20, 255);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Parse command line ---
    let args = Args::parse();
    let (width, height, fps, seed) = (args.width, args.height, args.fps, args.seed);
    let frame_time = args.frame_time();
    let font_path = args.font.clone();
    let config = args.into_config()?;

    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Neon Wall")
        .vsync()
        .build();
    rl.set_target_fps(fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Font with the rain glyphs, or raylib's default ---
    let font = match font_path {
        Some(path) => {
            let font = surface::load_font(&mut rl, &thread, &path, RAIN_GLYPHS)
                .with_context(|| format!("Loading --font {}", path.display()))?;
            log::info!("Loaded font {}", path.display());
            PanelFont::Loaded(font)
        }
        None => {
            log::warn!("No --font given, rain glyphs outside ASCII render with the default font");
            PanelFont::Default(rl.get_font_default())
        }
    };

    // --- One persistent render texture per panel ---
    let layout = Layout::grid(width as f32, height as f32, GRID_COLUMNS, GRID_ROWS, TITLE_HEIGHT);
    let mut targets = Vec::with_capacity(PanelId::ALL.len());
    for panel in PanelId::ALL {
        let body = layout.cells[panel.cell()].body;
        let target = rl
            .load_render_texture(&thread, body.width as u32, body.height as u32)
            .map_err(|e| anyhow!("Failed to create render texture for {}: {}", panel.title(), e))?;
        targets.push((panel, target));
    }

    let mut app = App::new(config, layout, seed);
    log::info!("Neon wall running at {}x{}, {} fps", width, height, fps);

    // --- Main Loop ---
    while !rl.window_should_close() {
        for action in input::poll_keys(&rl, &app.config) {
            app.handle(action);
        }

        let mouse = rl.get_mouse_position();
        app.pointer_moved(mouse);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(action) = app.click(mouse) {
                app.handle(action);
            }
        }

        // --- Tick every panel into its own persistent texture ---
        // Paused renderers still tick; they just skip their work.
        for (panel, target) in targets.iter_mut() {
            let w = target.width() as f32;
            let h = target.height() as f32;
            rl.draw_texture_mode(&thread, target, |mut tmd| {
                let mut surface = PanelSurface::new(&mut tmd, w, h, &font);
                app.draw_panel(*panel, &mut surface, frame_time);
            });
        }

        // --- Composite flipped panel textures onto the window ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);

        for (panel, target) in targets.iter() {
            let body = app.layout.cells[panel.cell()].body;
            d.draw_texture_pro(
                target,
                Rectangle::new(0.0, 0.0, target.width() as f32, -(target.height() as f32)),
                body,
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        let mut overlay = PanelSurface::new(&mut d, width as f32, height as f32, &font);
        app.draw_overlay(&mut overlay);
    }

    log::info!("Window closed, shutting down");
    Ok(())
}
