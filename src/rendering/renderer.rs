//! Renderer: owns the raster buffer and the drawing cursor, and walks the
//! scene graph.

use log::debug;

use crate::rendering::RasterBuffer;
use crate::scene::{Actor, Scene};

/// Current drawing position, moved by relative or absolute offsets.
///
/// There is exactly one cursor per renderer and no transform stack: the
/// traversal is single-pass and never nests coordinate frames.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    x: f64,
    y: f64,
}

impl Cursor {
    fn translate(&mut self, dx: f64, dy: f64, absolute: bool) {
        if absolute {
            self.x = 0.0;
            self.y = 0.0;
        }
        self.x += dx;
        self.y += dy;
    }
}

/// Walks a scene depth-first and exposes the two mutation primitives actors
/// are allowed to use: `move_to` and `plot_pixel`. Actors never touch the
/// buffer directly.
///
/// A renderer is built fresh per render pass and must not be shared or
/// reused across passes.
pub struct Renderer {
    buffer: RasterBuffer,
    cursor: Cursor,
}

impl Renderer {
    pub fn new(buffer: RasterBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
        }
    }

    /// Dimensions of the target buffer, for actors that size themselves to
    /// the grid.
    pub fn size(&self) -> (usize, usize) {
        self.buffer.size()
    }

    /// Move the cursor. An absolute move resets to the origin before the
    /// offset is applied; a relative move adds to the current position.
    pub fn move_to(&mut self, dx: f64, dy: f64, absolute: bool) {
        self.cursor.translate(dx, dy, absolute);
    }

    /// Write a brightness value into the buffer at the cursor's rounded
    /// position.
    pub fn plot_pixel(&mut self, brightness: f64) {
        self.buffer.plot(self.cursor.x, self.cursor.y, brightness);
    }

    /// Render every top-level actor of the scene.
    pub fn render(&mut self, scene: &mut Scene) {
        debug!(
            "render pass: {} top-level actor(s) into {:?} buffer",
            scene.actors_mut().len(),
            self.buffer.size()
        );
        for actor in scene.actors_mut() {
            self.process_actor(actor.as_mut());
        }
    }

    /// Draw one actor, then recurse into its children.
    ///
    /// The children list is read after `draw` returns, so children an actor
    /// appends to itself during its own draw call are visited in this same
    /// pass (append-then-recurse, not snapshot-before-draw). Depth-first,
    /// pre-order, insertion order.
    fn process_actor(&mut self, actor: &mut dyn Actor) {
        actor.draw(self);
        for child in actor.children_mut().iter_mut() {
            self.process_actor(child.as_mut());
        }
    }

    /// Consume the renderer and hand back the finished buffer for
    /// serialization.
    pub fn into_buffer(self) -> RasterBuffer {
        self.buffer
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }
}
