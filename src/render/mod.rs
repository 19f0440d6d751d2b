//! Rendering - wgpu surface and water tint

mod renderer;
mod tint;

pub use renderer::Renderer;
pub use tint::{water_clear_color, water_color, CLEAR_WATER, DIRTY_WATER};
