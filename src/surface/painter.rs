use std::sync::Arc;

use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Galley, Painter, Pos2, Rect, Shape};

use super::Surface;
use crate::style::StrokeStyle;

/// Paints onto the on-screen canvas through an egui [`Painter`].
///
/// Surface-local `(0, 0)` maps to the top-left corner of `rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn polyline(&mut self, points: &[Pos2], style: &StrokeStyle) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.extend(polyline_shapes(&screen, style));
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, rotation: f32, opacity: f32) {
        let font = FontId::proportional(size);
        let galley = self.painter.layout_no_wrap(text.to_owned(), font, Color32::BLACK);
        let center = self.to_screen(center);
        self.painter.add(glyph_shape(galley, center, rotation, opacity));
    }

    fn ring(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let stroke = egui::Stroke::new(width, color);
        self.painter.circle_stroke(self.to_screen(center), radius, stroke);
    }
}

/// A text shape centered on `center`.
///
/// egui rotates text around the galley's top-left corner, so the anchor is
/// moved back by the rotated half-size to keep the glyph centered.
fn glyph_shape(galley: Arc<Galley>, center: Pos2, rotation: f32, opacity: f32) -> Shape {
    let angle = rotation.to_radians();
    let half = galley.size() / 2.0;
    let anchor = center - Rot2::from_angle(angle) * half;
    TextShape::new(anchor, galley, Color32::BLACK)
        .with_angle(angle)
        .with_opacity_factor(opacity.clamp(0.0, 1.0))
        .into()
}

/// The line itself plus a disc on every vertex
fn polyline_shapes(points: &[Pos2], style: &StrokeStyle) -> Vec<Shape> {
    let radius = style.thickness / 2.0;
    let mut shapes = Vec::with_capacity(points.len() + 1);
    shapes.push(Shape::line(points.to_vec(), style.egui_stroke()));
    // egui path joins are mitred; the discs give round caps and joins
    for point in points {
        shapes.push(Shape::circle_filled(*point, radius, style.color));
    }
    shapes
}
