//! Rasterization pipeline: brightness grid, glyph palette, and the renderer
//! that walks a scene and plots into the grid.
//!
//! The pipeline is deliberately small: one buffer, one cursor, one pass.
//! Actors plot through the [`Renderer`] primitives and never touch the
//! buffer directly; the serialized text is produced from the buffer once
//! the traversal has finished.

pub mod palette;
pub mod raster;
pub mod renderer;

pub use palette::Palette;
pub use raster::RasterBuffer;
pub use renderer::Renderer;
