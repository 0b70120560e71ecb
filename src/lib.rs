//! Bounded 2D world of bouncing rectangles with brute force collision detection.
//!
//! Each frame every [`body::Body`] moves, then all pairs of bodies are tested
//! for overlap of their axis aligned bounding boxes and both bodies of an
//! overlapping pair are notified.

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod body;
pub mod collision_system;
pub mod config;
pub mod driver;
pub mod geo;
pub mod render;
pub mod utils;
pub mod world;

pub use body::{Body, BouncingRectangleBody, CollisionState, UpdateContext};
pub use collision_system::{CollisionDetector, SweepReport};
pub use config::{ConfigError, SimulationConfig};
pub use driver::FrameDriver;
pub use geo::{BoundingBox, Collider, ShapeKind};
pub use render::{AsciiCanvas, Color, CommandBuffer, DrawCommand, RenderSink};
pub use world::World;
