//! Clockface ASCII Rendering Engine
//!
//! Renders an analog clock face as ASCII art onto a fixed-size character
//! grid, driven by a UNIX timestamp. The pipeline is a small scene graph
//! (a clock face circle plus three hand lines) walked by a renderer that
//! plots brightness values into a raster buffer, which is then serialized
//! through a glyph ramp into printable text.
//!
//! Rendering is pure and deterministic: the same timestamp and grid always
//! produce byte-identical output, and nothing is shared between passes.
//!
//! # Example
//!
//! ```
//! use clockface::{render_clock, RenderConfig};
//!
//! # fn main() -> clockface::Result<()> {
//! let config = RenderConfig::default();
//! let text = render_clock(30, &config)?;
//! assert_eq!(text.lines().count(), 60);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub mod scene;
pub mod server;

use rendering::{Palette, RasterBuffer, Renderer};
use scene::{ClockFace, Scene};

/// Configuration for one clock render
///
/// The defaults match the reference dial: a 60x60 grid with a radius-22
/// face. Serialized lines are twice the grid width because every glyph is
/// doubled to square up terminal character cells.
///
/// # Examples
///
/// ```
/// let config = clockface::RenderConfig::default();
/// assert_eq!((config.width, config.height), (60, 60));
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Radius of the clock face circle, in cells
    pub face_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            face_radius: 22.0,
        }
    }
}

/// Render the clock for a UNIX timestamp (seconds, read as UTC wall time)
/// and serialize it to text.
///
/// Builds a fresh scene and renderer, so concurrent callers never share
/// mutable render state. Fails only at construction time, before any
/// drawing: zero grid dimensions or a nonsensical face radius.
pub fn render_clock(time: i64, config: &RenderConfig) -> Result<String> {
    if !config.face_radius.is_finite() || config.face_radius <= 0.0 {
        return Err(Error::ConfigError(format!(
            "face radius must be positive and finite, got {}",
            config.face_radius
        )));
    }

    let buffer = RasterBuffer::new(config.width, config.height)?;
    let mut renderer = Renderer::new(buffer);

    let mut scene = Scene::new();
    scene.add_actor(Box::new(ClockFace::new(time, config.face_radius)));

    renderer.render(&mut scene);

    let palette = Palette::default();
    Ok(renderer.into_buffer().serialize_with(&palette))
}
