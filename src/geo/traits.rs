use super::*;

/// shapes that can be moved without being mutated
pub trait Translate
where
    Self: Sized,
{
    fn translate(&self, dx: Float, dy: Float) -> Self;

    fn translate_by(&self, offset: &V2) -> Self {
        self.translate(offset.x, offset.y)
    }
}

impl Translate for P2 {
    fn translate(&self, dx: Float, dy: Float) -> P2 {
        P2::new(self.x + dx, self.y + dy)
    }
}

/// wether a shape contains a point
pub trait Contains {
    fn contains(&self, p: &P2) -> bool;
}

pub trait Intersect<T> {
    type Intersection;

    fn intersect(&self, other: &T) -> Option<Self::Intersection>;

    fn does_collide(&self, other: &T) -> bool {
        self.intersect(other).is_some()
    }
}
