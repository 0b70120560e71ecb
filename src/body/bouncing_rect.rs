use super::{Body, UpdateContext};
use crate::geo::*;
use crate::render::{Color, RenderSink};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// velocities are drawn from `[-MAX_SPEED, MAX_SPEED)` on both axes
pub const MAX_SPEED: Float = 5.0;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CollisionState {
    Normal,
    /// an overlap was found in the sweep following the last update
    Collided,
}

impl CollisionState {
    pub fn color(self) -> Color {
        match self {
            CollisionState::Normal => Color::NEUTRAL,
            CollisionState::Collided => Color::ALERT,
        }
    }
}

impl Default for CollisionState {
    fn default() -> Self {
        CollisionState::Normal
    }
}

/// Rectangle moving at constant speed that bounces off the world edges.
#[derive(Clone, PartialEq, Debug)]
pub struct BouncingRectangleBody {
    position: P2,
    velocity: V2,
    width: Float,
    height: Float,
    collider: Collider,
    state: CollisionState,
}

impl BouncingRectangleBody {
    pub fn new<R: Rng + ?Sized>(
        x: Float,
        y: Float,
        width: Float,
        height: Float,
        rng: &mut R,
    ) -> BouncingRectangleBody {
        let velocity = V2::new(
            rng.gen_range(-MAX_SPEED..MAX_SPEED),
            rng.gen_range(-MAX_SPEED..MAX_SPEED),
        );
        BouncingRectangleBody::with_velocity(x, y, width, height, velocity)
    }

    pub fn with_velocity(
        x: Float,
        y: Float,
        width: Float,
        height: Float,
        velocity: V2,
    ) -> BouncingRectangleBody {
        BouncingRectangleBody {
            position: P2::new(x, y),
            velocity,
            width,
            height,
            // local space, the collider sits on the body origin
            collider: Collider::rectangle(0.0, 0.0, width, height),
            state: CollisionState::Normal,
        }
    }

    pub fn velocity(&self) -> V2 {
        self.velocity
    }

    pub fn width(&self) -> Float {
        self.width
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn state(&self) -> CollisionState {
        self.state
    }
}

impl Body for BouncingRectangleBody {
    fn update(&mut self, ctx: &UpdateContext) {
        self.state = CollisionState::Normal;
        self.position += self.velocity;

        // the raw position is checked, not the far edge, so a body can
        // overshoot the right and bottom walls by its size before turning
        if outside_range(self.position.x, ctx.width) {
            self.velocity.x = -self.velocity.x;
        }
        if outside_range(self.position.y, ctx.height) {
            self.velocity.y = -self.velocity.y;
        }
    }

    fn render(&self, sink: &mut dyn RenderSink) {
        sink.fill_rectangle(
            self.position.x,
            self.position.y,
            self.width,
            self.height,
            self.state.color(),
        );
    }

    fn on_collision(&mut self, _other: &dyn Body) {
        self.state = CollisionState::Collided;
    }

    fn position(&self) -> P2 {
        self.position
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }
}
