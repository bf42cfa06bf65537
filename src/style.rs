use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// A point in surface-local pixel coordinates
pub type Point = Pos2;

/// Thinnest stroke we will ever record
pub const MIN_THICKNESS: f32 = 0.5;

/// Visual parameters of a freehand stroke, captured once when the stroke begins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub thickness: f32,
    pub color: Color32,
}

impl StrokeStyle {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self {
            thickness: thickness.max(MIN_THICKNESS),
            color,
        }
    }

    /// Stroke used by egui when painting this style
    pub fn egui_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.thickness, self.color)
    }
}

/// Glyph and rotation of a placed sticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerStyle {
    pub glyph: String,
    /// Degrees, always in `[0, 360)`
    pub rotation: f32,
}

impl StickerStyle {
    pub fn new(glyph: impl Into<String>, rotation: f32) -> Self {
        Self {
            glyph: glyph.into(),
            rotation: normalize_degrees(rotation),
        }
    }
}

/// Wraps any angle into `[0, 360)`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_wrapped() {
        assert_eq!(StickerStyle::new("★", 370.0).rotation, 10.0);
        assert_eq!(StickerStyle::new("★", -90.0).rotation, 270.0);
        assert_eq!(StickerStyle::new("★", 360.0).rotation, 0.0);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }

    #[test]
    fn test_thickness_is_positive() {
        let style = StrokeStyle::new(0.0, Color32::RED);
        assert!(style.thickness > 0.0);
        assert_eq!(StrokeStyle::new(3.0, Color32::RED).thickness, 3.0);
    }
}
