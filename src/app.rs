use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::{Color, Vector2};

use crate::balls::BallRenderer;
use crate::burst::BurstRenderer;
use crate::config::Config;
use crate::constants::*;
use crate::controls::{self, Animation, UiAction};
use crate::label::LabelEffect;
use crate::layout::{Layout, Region};
use crate::rain::RainRenderer;
use crate::renderer::Renderer;
use crate::shapes::ShapeRenderer;
use crate::state::LoopState;
use crate::surface::{fade, Glow, Surface};

/// The panels of the wall, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Balls,
    Rain,
    Label,
    Shapes,
    Burst,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [PanelId::Balls, PanelId::Rain, PanelId::Label, PanelId::Shapes, PanelId::Burst];

    pub fn cell(&self) -> usize {
        match self {
            PanelId::Balls => 0,
            PanelId::Rain => 1,
            PanelId::Label => 2,
            PanelId::Shapes => 3,
            PanelId::Burst => 4,
        }
    }

    pub fn from_cell(cell: usize) -> Option<PanelId> {
        PanelId::ALL.into_iter().find(|p| p.cell() == cell)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Balls => "BOUNCING BALL MATRIX",
            PanelId::Rain => "MATRIX RAIN",
            PanelId::Label => "NEON TEXT",
            PanelId::Shapes => "GEOMETRIC SHAPES",
            PanelId::Burst => "PARTICLE EXPLOSION",
        }
    }

    pub fn animation(&self) -> Option<Animation> {
        match self {
            PanelId::Balls => Some(Animation::Balls),
            PanelId::Rain => Some(Animation::Rain),
            PanelId::Shapes => Some(Animation::Shapes),
            PanelId::Label | PanelId::Burst => None,
        }
    }
}

/// Handles to every effect, passed to the control layer.
pub struct Renderers {
    pub balls: BallRenderer,
    pub rain: RainRenderer,
    pub shapes: ShapeRenderer,
    pub burst: BurstRenderer,
    pub label: LabelEffect,
}

impl Renderers {
    /// With a seed every renderer gets its own reproducible stream.
    pub fn new(seed: Option<u64>, config: &Config) -> Self {
        let base = seed.unwrap_or_else(|| rand::rng().random());
        let rng = |salt: u64| StdRng::seed_from_u64(base.wrapping_add(salt));
        Self {
            balls: BallRenderer::new(rng(1)),
            rain: RainRenderer::new(rng(2)),
            shapes: ShapeRenderer::new(rng(3)),
            burst: BurstRenderer::new(rng(4)),
            label: LabelEffect::new(config.label.color),
        }
    }
}

/// Binds the renderer to its surface on first use, then runs one frame.
pub fn run_frame<R: Renderer>(renderer: &mut R, surface: &mut dyn Surface, config: &R::Config) {
    if renderer.state() == LoopState::Uninitialized {
        renderer.initialize(surface, config);
    }
    renderer.frame(surface, config);
}

pub struct App {
    pub config: Config,
    pub renderers: Renderers,
    pub layout: Layout,
    hovered_title: Option<usize>,
}

impl App {
    pub fn new(config: Config, layout: Layout, seed: Option<u64>) -> Self {
        let renderers = Renderers::new(seed, &config);
        Self { config, renderers, layout, hovered_title: None }
    }

    pub fn handle(&mut self, action: UiAction) {
        controls::apply(action, &mut self.config, &mut self.renderers);
    }

    /// Title hover state follows the pointer: entering a title glitches it,
    /// leaving reverts it.
    pub fn pointer_moved(&mut self, point: Vector2) {
        let hovered = self
            .layout
            .hit_test(point)
            .filter(|hit| hit.region == Region::Title)
            .map(|hit| hit.cell);
        if hovered != self.hovered_title {
            log::trace!("Title hover {:?} -> {:?}", self.hovered_title, hovered);
            self.hovered_title = hovered;
        }
    }

    #[cfg(test)]
    pub fn hovered_title(&self) -> Option<usize> {
        self.hovered_title
    }

    /// Maps a click to an action: a click in the burst body explodes there.
    pub fn click(&self, point: Vector2) -> Option<UiAction> {
        let hit = self.layout.hit_test(point)?;
        match (PanelId::from_cell(hit.cell), hit.region) {
            (Some(PanelId::Burst), Region::Body) => Some(UiAction::Explode { x: hit.local.x, y: hit.local.y }),
            _ => None,
        }
    }

    /// One scheduler tick for one panel.
    pub fn draw_panel(&mut self, panel: PanelId, surface: &mut dyn Surface, dt: f32) {
        let r = &mut self.renderers;
        match panel {
            PanelId::Balls => run_frame(&mut r.balls, surface, &self.config.balls),
            PanelId::Rain => run_frame(&mut r.rain, surface, &self.config.rain),
            PanelId::Shapes => run_frame(&mut r.shapes, surface, &self.config.shapes),
            PanelId::Burst => run_frame(&mut r.burst, surface, &self.config.burst),
            PanelId::Label => {
                r.label.tick(dt);
                r.label.draw(surface);
            }
        }
    }

    /// Titles, button captions and the control legend, drawn in window space.
    pub fn draw_overlay(&self, surface: &mut dyn Surface) {
        for panel in PanelId::ALL {
            let cell = self.layout.cells[panel.cell()];
            let hovered = self.hovered_title == Some(panel.cell());
            draw_title(surface, panel.title(), Vector2::new(cell.title.x + 4.0, cell.title.y + 4.0), hovered);

            if let Some(animation) = panel.animation() {
                let caption = animation.button_caption(animation.is_running(&self.config));
                let width = surface.measure_text(caption, 16.0);
                let position = Vector2::new(cell.title.x + cell.title.width - width - 6.0, cell.title.y + 6.0);
                surface.fill_text(caption, position, 16.0, Color::GRAY);
            }
        }

        if let Some(cell) = self.layout.cells.get(5) {
            let lines = self.legend();
            let mut y = cell.title.y + 4.0;
            for line in lines {
                surface.fill_text(&line, Vector2::new(cell.title.x + 4.0, y), 18.0, Color::LIGHTGRAY);
                y += 24.0;
            }
        }
    }

    fn legend(&self) -> Vec<String> {
        let c = &self.config;
        vec![
            "CONTROLS".to_string(),
            format!("[1] balls {}   [Q/A] speed {:.0}", on_off(c.balls.running), c.balls.speed),
            format!("[2] rain {}   [W/S] speed {:.0}", on_off(c.rain.running), c.rain.speed),
            format!("[3] shapes {}   [E/D] size {:.0}", on_off(c.shapes.running), c.shapes.size),
            format!("[SPACE/click] explode   [R/F] count {}", c.burst.count),
            format!("[N] next text   [C] color   \"{}\"", self.renderers.label.text()),
            format!("live particles {}", self.renderers.burst.particles().len()),
        ]
    }
}

fn on_off(running: bool) -> &'static str {
    if running { "on" } else { "off" }
}

/// Panel title; the hovered one gets the split-color glitch.
pub fn draw_title(surface: &mut dyn Surface, text: &str, position: Vector2, hovered: bool) {
    let cyan = Color::new(0x00, 0xff, 0xff, 0xff);
    let magenta = Color::new(0xff, 0x00, 0xff, 0xff);

    if !hovered {
        surface.fill_text(text, position, TITLE_FONT_SIZE, cyan);
        return;
    }

    surface.save();
    surface.fill_text(text, Vector2::new(position.x + GLITCH_OFFSET, position.y), TITLE_FONT_SIZE, fade(magenta, 0.8));
    surface.fill_text(text, Vector2::new(position.x - GLITCH_OFFSET, position.y), TITLE_FONT_SIZE, fade(cyan, 0.8));
    surface.set_glow(Some(Glow::new(magenta, GLITCH_GLOW)));
    surface.fill_text(text, Vector2::new(position.x + GLITCH_LEAN, position.y), TITLE_FONT_SIZE, cyan);
    surface.restore();
}
