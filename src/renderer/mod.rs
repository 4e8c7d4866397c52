//! Rendering: pure frame construction + WebGPU presentation

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Hud, build_frame, monster_scale};
pub use pipeline::RenderState;
pub use vertex::Vertex;
