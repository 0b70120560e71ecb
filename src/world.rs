//! The simulated world

use crate::body::{Body, BouncingRectangleBody, UpdateContext};
use crate::collision_system::{unordered_pairs, CollisionDetector, SweepReport};
use crate::geo::*;
use crate::render::RenderSink;
use rand::Rng;

/// Bounded world owning all bodies.
///
/// Bodies keep their insertion order. The order decides in which order pairs
/// are checked, it never changes the outcome of a frame.
pub struct World {
    width: Float,
    height: Float,
    bodies: Vec<Box<dyn Body>>,
    detector: CollisionDetector,
}

impl World {
    /// # Panics
    /// if `width` or `height` is negative or NaN
    pub fn new(width: Float, height: Float) -> World {
        assert!(
            width >= 0.0 && height >= 0.0,
            "world needs a non negative size, got {} x {}",
            width,
            height
        );
        log::debug!("creating world of {} x {}", width, height);
        World {
            width,
            height,
            bodies: Vec::new(),
            detector: CollisionDetector::new(),
        }
    }

    pub fn width(&self) -> Float {
        self.width
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }

    pub fn context(&self) -> UpdateContext {
        UpdateContext {
            width: self.width,
            height: self.height,
        }
    }

    pub fn add_body<B: Body + 'static>(&mut self, body: B) {
        self.add_boxed(Box::new(body));
    }

    pub fn add_boxed(&mut self, body: Box<dyn Body>) {
        log::debug!("adding body #{} at {}", self.bodies.len(), body.position());
        self.bodies.push(body);
    }

    /// Adds `count` bouncing rectangles at random positions inside the world.
    ///
    /// # Panics
    /// if the world has no area to place bodies in
    pub fn populate<R: Rng + ?Sized>(&mut self, count: usize, width: Float, height: Float, rng: &mut R) {
        assert!(
            self.width > 0.0 && self.height > 0.0,
            "cannot place bodies in a world of {} x {}",
            self.width,
            self.height
        );
        for _ in 0..count {
            let x = rng.gen_range(0.0..self.width);
            let y = rng.gen_range(0.0..self.height);
            self.add_body(BouncingRectangleBody::new(x, y, width, height, rng));
        }
        log::debug!("populated world with {} rectangles, {} bodies total", count, self.len());
    }

    pub fn bodies(&self) -> &[Box<dyn Body>] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Step the simulation by one frame
    ///
    /// Every body moves first, then all pairs are checked against the new
    /// positions.
    pub fn update(&mut self) -> SweepReport {
        let ctx = self.context();
        for body in self.bodies.iter_mut() {
            body.update(&ctx);
        }
        self.sweep()
    }

    /// Checks all `n * (n - 1) / 2` pairs and notifies both bodies of every
    /// overlapping pair, the lower index first.
    fn sweep(&mut self) -> SweepReport {
        let mut report = SweepReport::default();
        for (i, j) in unordered_pairs(self.bodies.len()) {
            report.pairs_tested += 1;
            let (head, tail) = self.bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if self.detector.detect(&**a, &**b) {
                log::trace!("collision between #{} and #{}", i, j);
                a.on_collision(&**b);
                b.on_collision(&**a);
                report.collisions.push((i, j));
            }
        }
        report
    }

    /// Draws every body in insertion order. Clearing the sink is up to the caller.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for body in self.bodies.iter() {
            body.render(sink);
        }
    }
}
