use egui::Pos2;

use super::CommandId;
use crate::style::{Point, StrokeStyle};
use crate::surface::Surface;

/// Freehand line: an append-only sequence of points drawn as one path
#[derive(Debug)]
pub struct Stroke {
    id: CommandId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    /// Start a stroke at `start`; a stroke always holds at least one point
    pub fn new(start: Pos2, style: StrokeStyle) -> Self {
        Self {
            id: CommandId::new(),
            points: vec![start],
            style,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn extend(&mut self, x: f32, y: f32) {
        self.points.push(Pos2::new(x, y));
    }

    /// A lone point (click without drag) is drawn as a round dot the size of
    /// the brush, the same mark a round-capped zero-length line leaves.
    pub fn display(&self, surface: &mut dyn Surface) {
        match self.points.as_slice() {
            [] => {}
            [only] => surface.dot(*only, self.style.thickness / 2.0, self.style.color),
            points => surface.polyline(points, &self.style),
        }
    }
}
