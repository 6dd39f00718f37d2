//! Rendering module for headless snapshots

mod renderer;

pub use renderer::PixelRenderer;
