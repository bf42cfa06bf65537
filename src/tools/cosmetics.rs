use egui::Color32;
use uuid::Uuid;

/// Saturation/lightness of generated stroke colors
const STROKE_SATURATION: f32 = 0.9;
const STROKE_LIGHTNESS: f32 = 0.45;

/// Source of the purely cosmetic tool parameters picked on tool selection
pub trait CosmeticSource: Send {
    fn stroke_color(&mut self) -> Color32;

    /// Degrees in `[0, 360)`
    fn sticker_rotation(&mut self) -> f32;
}

/// Random hue and rotation, drawn from v4 UUID entropy
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCosmetics;

impl RandomCosmetics {
    fn next_degrees() -> u32 {
        (Uuid::new_v4().as_u128() % 360) as u32
    }
}

impl CosmeticSource for RandomCosmetics {
    fn stroke_color(&mut self) -> Color32 {
        hsl_color(Self::next_degrees() as f32, STROKE_SATURATION, STROKE_LIGHTNESS)
    }

    fn sticker_rotation(&mut self) -> f32 {
        Self::next_degrees() as f32
    }
}

/// Always hands out the same color and rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCosmetics {
    pub color: Color32,
    pub rotation: f32,
}

impl Default for FixedCosmetics {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            rotation: 0.0,
        }
    }
}

impl CosmeticSource for FixedCosmetics {
    fn stroke_color(&mut self) -> Color32 {
        self.color
    }

    fn sticker_rotation(&mut self) -> f32 {
        self.rotation
    }
}

/// `hsl(hue, saturation, lightness)` as an opaque sRGB color
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_color(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_color(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_color(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
        assert_eq!(hsl_color(360.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_random_values_stay_in_range() {
        let mut source = RandomCosmetics;
        for _ in 0..100 {
            let rotation = source.sticker_rotation();
            assert!((0.0..360.0).contains(&rotation));
            assert_eq!(source.stroke_color().a(), 255);
        }
    }
}
