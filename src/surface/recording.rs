use egui::{Color32, Pos2};

use super::Surface;
use crate::style::StrokeStyle;

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        style: StrokeStyle,
    },
    Dot {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Glyph {
        center: Pos2,
        text: String,
        size: f32,
        rotation: f32,
        opacity: f32,
    },
    Ring {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
}

impl SurfaceOp {
    /// Number of line segments this op draws (only polylines have any)
    pub fn segment_count(&self) -> usize {
        match self {
            SurfaceOp::Polyline { points, .. } => points.len().saturating_sub(1),
            _ => 0,
        }
    }
}

/// Records draw calls instead of painting them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Ops drawn since the most recent `clear`
    pub fn visible_ops(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == SurfaceOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    pub fn take(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn polyline(&mut self, points: &[Pos2], style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(SurfaceOp::Dot {
            center,
            radius,
            color,
        });
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, rotation: f32, opacity: f32) {
        self.ops.push(SurfaceOp::Glyph {
            center,
            text: text.to_owned(),
            size,
            rotation,
            opacity,
        });
    }

    fn ring(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(SurfaceOp::Ring {
            center,
            radius,
            width,
            color,
        });
    }
}
