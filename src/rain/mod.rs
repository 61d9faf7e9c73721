pub mod drop;
pub mod renderer;

pub use renderer::RainRenderer;
