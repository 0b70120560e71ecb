pub mod aabb;
pub mod traits;

pub use crate::utils::*;
pub use aabb::*;
pub use traits::*;
use serde::*;

/// tag of a collider variant, used for dispatching on pairs of colliders
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
}

/// Shape attached to a body.
/// Bodies keep their collider in local coordinates and translate it by their position.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Collider {
    Rectangle(BoundingBox),
}

impl Collider {
    pub fn rectangle(x: Float, y: Float, width: Float, height: Float) -> Collider {
        Collider::Rectangle(BoundingBox::new(x, y, width, height))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Collider::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

impl Translate for Collider {
    fn translate(&self, dx: Float, dy: Float) -> Collider {
        match self {
            Collider::Rectangle(bb) => Collider::Rectangle(bb.translate(dx, dy)),
        }
    }
}

impl From<BoundingBox> for Collider {
    fn from(bb: BoundingBox) -> Collider {
        Collider::Rectangle(bb)
    }
}
