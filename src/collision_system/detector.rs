use crate::body::Body;
use crate::geo::*;

/// Pairwise overlap test between bodies. Holds no state.
#[derive(Copy, Clone, Debug, Default)]
pub struct CollisionDetector;

impl CollisionDetector {
    pub fn new() -> CollisionDetector {
        CollisionDetector
    }

    /// compares the global colliders of both bodies
    pub fn detect(&self, a: &dyn Body, b: &dyn Body) -> bool {
        self.colliders_overlap(&a.global_collider(), &b.global_collider())
    }

    /// Shape pairs without an overlap test never collide.
    pub fn colliders_overlap(&self, a: &Collider, b: &Collider) -> bool {
        match (a, b) {
            (Collider::Rectangle(r1), Collider::Rectangle(r2)) => r1.does_collide(r2),
            #[allow(unreachable_patterns)]
            (_, _) => false,
        }
    }
}
