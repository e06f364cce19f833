use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{TYPE_MOVIE, TYPE_TV_SHOW};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// `n`-step sequential ramp from dark to light red, for ranked bars.
pub fn red_ramp(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let t = if n <= 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            to_color32(Hsl::new(4.0, 0.70, 0.30 + 0.40 * t))
        })
        .collect()
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// Fill for the duration histogram bars.
pub const HISTOGRAM_FILL: Color32 = Color32::from_rgb(0x42, 0x92, 0xC6);

/// Fixed accent per content type, hue-spaced fallback for anything else.
pub fn type_color(content_type: &str, slot: usize) -> Color32 {
    match content_type {
        TYPE_MOVIE => Color32::from_rgb(0x70, 0xCD, 0xDE),
        TYPE_TV_SHOW => Color32::from_rgb(0xF4, 0x88, 0xBE),
        _ => {
            let fallback = generate_palette(8);
            fallback[slot % fallback.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for pair in palette.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn ramp_runs_dark_to_light() {
        let ramp = red_ramp(5);
        assert_eq!(ramp.len(), 5);
        let luma = |c: Color32| c.r() as u16 + c.g() as u16 + c.b() as u16;
        assert!(luma(ramp[0]) < luma(ramp[4]));
    }

    #[test]
    fn known_types_get_fixed_accents() {
        assert_eq!(type_color(TYPE_MOVIE, 3), Color32::from_rgb(0x70, 0xCD, 0xDE));
        assert_eq!(type_color(TYPE_TV_SHOW, 0), Color32::from_rgb(0xF4, 0x88, 0xBE));
        assert_ne!(type_color("Short", 0), type_color("Short", 1));
    }
}
