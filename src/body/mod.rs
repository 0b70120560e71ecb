pub mod bouncing_rect;

pub use bouncing_rect::*;

use crate::geo::*;
use crate::render::RenderSink;

/// Everything a body gets to see of the world while it moves.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UpdateContext {
    pub width: Float,
    pub height: Float,
}

/// A simulated entity.
///
/// The collider returned by [`Body::collider`] is expressed relative to the
/// body, [`Body::global_collider`] places it into the world.
pub trait Body {
    /// advances the body by one simulation step
    fn update(&mut self, ctx: &UpdateContext);

    fn render(&self, sink: &mut dyn RenderSink);

    /// Called once per detected overlap, with the peer as `other`.
    /// Both participants get called, in no particular order.
    fn on_collision(&mut self, other: &dyn Body);

    fn position(&self) -> P2;

    fn collider(&self) -> Option<&Collider>;

    /// # Panics
    /// if the body has no collider
    fn global_collider(&self) -> Collider {
        let position = self.position();
        match self.collider() {
            Some(collider) => collider.translate(position.x, position.y),
            None => panic!("global_collider called on a body without a collider"),
        }
    }
}
