//! Scene graph: drawable actors and the root container.
//!
//! Actors form a tree with exclusive parent-to-child ownership. A scene is
//! built fresh for each render pass, traversed once, and discarded; nothing
//! carries over between passes.

pub mod clock;
pub mod line;

pub use clock::ClockFace;
pub use line::Line;

use crate::rendering::Renderer;

/// A drawable scene-graph node.
///
/// `draw` may append children to the node's own list; the renderer visits
/// the list only after `draw` returns, so such children are still drawn in
/// the same pass.
pub trait Actor {
    fn draw(&mut self, renderer: &mut Renderer);

    fn children_mut(&mut self) -> &mut Vec<Box<dyn Actor>>;
}

/// Root container holding the top-level actors of one render pass.
#[derive(Default)]
pub struct Scene {
    actors: Vec<Box<dyn Actor>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, actor: Box<dyn Actor>) {
        self.actors.push(actor);
    }

    pub fn actors_mut(&mut self) -> &mut [Box<dyn Actor>] {
        &mut self.actors
    }
}
