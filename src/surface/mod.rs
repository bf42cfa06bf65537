//! Drawing surfaces that display commands render into.
//!
//! Commands only ever talk to the [`Surface`] trait, so the same replay
//! code paints the on-screen canvas, the export raster and the test recorder.

use egui::{Color32, Pos2};

use crate::style::StrokeStyle;

mod painter;
mod raster;
pub mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// A 2D drawing target in surface-local coordinates
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// One connected path through `points` in order, with round caps and joins
    fn polyline(&mut self, points: &[Pos2], style: &StrokeStyle);

    /// A filled disc
    fn dot(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Text centered on `center`, rotated about it by `rotation` degrees
    fn glyph(&mut self, center: Pos2, text: &str, size: f32, rotation: f32, opacity: f32);

    /// A circle outline
    fn ring(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
}
