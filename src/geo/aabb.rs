use super::*;
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle.
/// The origin is the top left corner, y grows downwards.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    origin: P2,
    width: Float,
    height: Float,
}

impl BoundingBox {
    pub fn new(x: Float, y: Float, width: Float, height: Float) -> BoundingBox {
        BoundingBox::from_origin(P2::new(x, y), width, height)
    }

    pub fn from_origin(origin: P2, width: Float, height: Float) -> BoundingBox {
        assert!(
            width >= 0.0 && height >= 0.0,
            "bounding box needs a non negative size, got {} x {}",
            width,
            height
        );
        BoundingBox {
            origin,
            width,
            height,
        }
    }

    pub fn origin(&self) -> P2 {
        self.origin
    }

    pub fn x(&self) -> Float {
        self.origin.x
    }

    pub fn y(&self) -> Float {
        self.origin.y
    }

    pub fn width(&self) -> Float {
        self.width
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn top(&self) -> Float {
        self.origin.y
    }

    pub fn bottom(&self) -> Float {
        self.origin.y + self.height
    }

    pub fn left(&self) -> Float {
        self.origin.x
    }

    pub fn right(&self) -> Float {
        self.origin.x + self.width
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }
}

impl Translate for BoundingBox {
    fn translate(&self, dx: Float, dy: Float) -> BoundingBox {
        BoundingBox {
            origin: self.origin.translate(dx, dy),
            width: self.width,
            height: self.height,
        }
    }
}

impl Intersect<BoundingBox> for BoundingBox {
    type Intersection = ();

    fn intersect(&self, other: &BoundingBox) -> Option<()> {
        if self.overlaps(other) {
            Some(())
        } else {
            None
        }
    }
}

impl Contains for BoundingBox {
    fn contains(&self, p: &P2) -> bool {
        self.left() < p.x && p.x < self.right() && self.top() < p.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    fn small(values: &[Float]) -> bool {
        values.iter().all(|v| v.is_finite() && v.abs() < 1.0e6)
    }

    #[quickcheck]
    fn translation_composes(x: Float, y: Float, a: Float, b: Float, c: Float, d: Float) -> TestResult {
        if !small(&[x, y, a, b, c, d]) {
            return TestResult::discard();
        }
        let bb = BoundingBox::new(x, y, 10.0, 20.0);
        let stepwise = bb.translate(a, b).translate(c, d);
        let direct = bb.translate(a + c, b + d);
        TestResult::from_bool(
            approx_eq(stepwise.x(), direct.x())
                && approx_eq(stepwise.y(), direct.y())
                && stepwise.width() == direct.width()
                && stepwise.height() == direct.height(),
        )
    }

    #[quickcheck]
    fn overlap_is_symmetric(a: (Float, Float, Float, Float), b: (Float, Float, Float, Float)) -> TestResult {
        if !small(&[a.0, a.1, a.2, a.3, b.0, b.1, b.2, b.3]) {
            return TestResult::discard();
        }
        let r1 = BoundingBox::new(a.0, a.1, a.2.abs(), a.3.abs());
        let r2 = BoundingBox::new(b.0, b.1, b.2.abs(), b.3.abs());
        TestResult::from_bool(r1.overlaps(&r2) == r2.overlaps(&r1))
    }

    #[test]
    fn translate_leaves_receiver_untouched() {
        let bb = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let moved = bb.translate(10.0, -5.0);
        assert_eq!(bb, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(moved, BoundingBox::new(11.0, -3.0, 3.0, 4.0));
    }

    #[test]
    fn edges() {
        let bb = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bb.left(), 1.0);
        assert_eq!(bb.right(), 4.0);
        assert_eq!(bb.top(), 2.0);
        assert_eq!(bb.bottom(), 6.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        let c = BoundingBox::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(a.does_collide(&b));
        assert_eq!(a.intersect(&b), Some(()));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn nan_never_overlaps() {
        let a = BoundingBox::new(Float::NAN, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contains_is_strict() {
        let bb = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bb.contains(&P2::new(5.0, 5.0)));
        assert!(!bb.contains(&P2::new(0.0, 5.0)));
        assert!(!bb.contains(&P2::new(5.0, 10.0)));
    }

    #[test]
    #[should_panic]
    fn negative_size_panics() {
        BoundingBox::new(0.0, 0.0, -1.0, 1.0);
    }
}
