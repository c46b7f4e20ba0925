use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Above this many series neighbouring hues get hard to tell apart, so the
/// lightness alternates as well.
const ALTERNATE_LIGHTNESS_ABOVE: usize = 8;

/// `n` distinct colours with evenly spaced hues.
pub fn series_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let lightness = if n > ALTERNATE_LIGHTNESS_ABOVE && i % 2 == 1 {
                0.38
            } else {
                0.52
            };
            let rgb: Srgb = Hsl::new(hue, 0.75, lightness).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colour for series `index`, shared by the window and PNG renderers.
/// A lone series is drawn in a fixed blue.
pub fn series_color(palette: &[Color32], index: usize) -> Color32 {
    if palette.len() == 1 {
        return Color32::from_rgb(30, 110, 200);
    }
    palette.get(index).copied().unwrap_or(Color32::GRAY)
}
