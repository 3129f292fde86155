//! VizList: a row of boxes joined by arrows.

use std::fmt::Display;

use super::{Draw, LABEL_SIZE};
use crate::error::Result;
use crate::layout::types::Point;
use crate::renderers::Surface;

pub const CELL_WIDTH: f64 = 40.0;
pub const CELL_HEIGHT: f64 = 30.0;
/// Left edge to left edge of consecutive cells.
pub const CELL_PITCH: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct VizList {
    labels: Vec<String>,
    /// Top-left corner of the first cell. Starts at the origin; callers
    /// move it by assignment.
    pub position: Point,
}

impl VizList {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            labels: items.into_iter().map(|x| x.to_string()).collect(),
            position: Point::default(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn height(&self) -> f64 {
        CELL_HEIGHT
    }

    pub fn width(&self) -> f64 {
        match self.labels.len() {
            0 => 0.0,
            n => (n - 1) as f64 * CELL_PITCH + CELL_WIDTH,
        }
    }
}

impl Draw for VizList {
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        let mid_y = self.position.y + CELL_HEIGHT / 2.0;
        for (i, label) in self.labels.iter().enumerate() {
            let origin = self.position.offset(i as f64 * CELL_PITCH, 0.0);
            surface.rect(origin, CELL_WIDTH, CELL_HEIGHT);
            surface.text(
                Point::new(origin.x + CELL_WIDTH / 2.0, mid_y),
                label.clone(),
                LABEL_SIZE,
            );
            if i + 1 < self.labels.len() {
                surface.arrow(
                    Point::new(origin.x + CELL_WIDTH, mid_y),
                    Point::new(origin.x + CELL_PITCH, mid_y),
                );
            }
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
