//! Drawing boundary of the simulation.
//!
//! Bodies never talk to a graphics backend directly, they emit commands to a
//! [`RenderSink`]. Two sinks ship with the crate: [`CommandBuffer`] records the
//! commands, [`AsciiCanvas`] rasterizes them onto a character grid.

pub mod ascii;

pub use ascii::*;

use crate::geo::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const NEUTRAL: Color = Color::rgb(0x2e, 0x86, 0xde);
    pub const ALERT: Color = Color::rgb(0xe7, 0x4c, 0x3c);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

pub trait RenderSink {
    fn clear(&mut self, region: &BoundingBox);
    fn fill_rectangle(&mut self, x: Float, y: Float, width: Float, height: Float, color: Color);
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(BoundingBox),
    FillRectangle { rect: BoundingBox, color: Color },
}

/// Sink that keeps every command in the order it was issued.
#[derive(Clone, Default, Debug)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> CommandBuffer {
        CommandBuffer {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// hands out the recorded commands and leaves the buffer empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for CommandBuffer {
    fn clear(&mut self, region: &BoundingBox) {
        self.commands.push(DrawCommand::Clear(*region));
    }

    fn fill_rectangle(&mut self, x: Float, y: Float, width: Float, height: Float, color: Color) {
        self.commands.push(DrawCommand::FillRectangle {
            rect: BoundingBox::new(x, y, width, height),
            color,
        });
    }
}
