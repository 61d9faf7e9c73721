pub mod renderer;
pub mod shape;

pub use renderer::ShapeRenderer;
