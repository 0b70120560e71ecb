use super::{Color, RenderSink};
use crate::geo::*;
use std::fmt;

pub const EMPTY_GLYPH: char = '.';

/// Character grid covering a world of `world_width` x `world_height`.
/// Every cell is sampled at its center.
#[derive(Clone, Debug)]
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    cell_width: Float,
    cell_height: Float,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(columns: usize, rows: usize, world_width: Float, world_height: Float) -> AsciiCanvas {
        assert!(columns > 0 && rows > 0, "canvas needs at least one cell");
        AsciiCanvas {
            columns,
            rows,
            cell_width: world_width / columns as Float,
            cell_height: world_height / rows as Float,
            cells: vec![EMPTY_GLYPH; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn glyph_at(&self, column: usize, row: usize) -> Option<char> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    pub fn glyph_for(color: Color) -> char {
        match color {
            Color::NEUTRAL => 'o',
            Color::ALERT => 'X',
            _ => '#',
        }
    }

    fn cell_center(&self, column: usize, row: usize) -> P2 {
        P2::new(
            (column as Float + 0.5) * self.cell_width,
            (row as Float + 0.5) * self.cell_height,
        )
    }

    fn paint(&mut self, region: &BoundingBox, glyph: char) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                if region.contains(&self.cell_center(column, row)) {
                    self.cells[row * self.columns + column] = glyph;
                }
            }
        }
    }
}

impl RenderSink for AsciiCanvas {
    fn clear(&mut self, region: &BoundingBox) {
        self.paint(region, EMPTY_GLYPH);
    }

    fn fill_rectangle(&mut self, x: Float, y: Float, width: Float, height: Float, color: Color) {
        self.paint(&BoundingBox::new(x, y, width, height), AsciiCanvas::glyph_for(color));
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
