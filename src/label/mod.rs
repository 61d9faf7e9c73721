pub mod effect;
pub mod text_node;

pub use effect::LabelEffect;
