pub mod particle;
pub mod renderer;

pub use renderer::BurstRenderer;
