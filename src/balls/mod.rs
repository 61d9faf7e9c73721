pub mod ball;
pub mod renderer;

pub use renderer::BallRenderer;
