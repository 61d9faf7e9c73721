use crate::state::LoopState;
use crate::surface::Surface;

/// A component owning one drawing surface and a per-frame update/draw routine.
///
/// The host calls [`Renderer::frame`] once per display refresh whether or not
/// the renderer is running; the renderer's own configuration section decides
/// if the frame does any work.
pub trait Renderer {
    type Config;

    fn initialize(&mut self, surface: &dyn Surface, config: &Self::Config);
    fn frame(&mut self, surface: &mut dyn Surface, config: &Self::Config);
    fn state(&self) -> LoopState;
}
