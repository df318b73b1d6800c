use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster version → Color32
// ---------------------------------------------------------------------------

/// Maps each booster version to a distinct colour for the scatter plot.
#[derive(Debug, Clone)]
pub struct BoosterColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl BoosterColors {
    /// Build the map from the dataset's distinct booster versions.
    pub fn new(versions: &[String]) -> Self {
        let palette = generate_palette(versions.len());
        let mapping: BTreeMap<String, Color32> = versions
            .iter()
            .zip(palette.into_iter())
            .map(|(v, c): (&String, Color32)| (v.clone(), c))
            .collect();

        BoosterColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a booster version.
    pub fn color_for(&self, version: &str) -> Color32 {
        self.mapping
            .get(version)
            .copied()
            .unwrap_or(self.default_color)
    }
}
