use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Origin;

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
// Color mapping: origin → Color32
// ---------------------------------------------------------------------------

/// Assigns each origin present in the dataset a distinct colour, shared by
/// the scatter and distribution views so a region keeps one identity
/// everywhere.
#[derive(Debug, Clone, Default)]
pub struct OriginColors {
    mapping: BTreeMap<Origin, Color32>,
}

impl OriginColors {
    /// Build the mapping for the origins observed in the loaded dataset.
    pub fn new(origins: &[Origin]) -> Self {
        let palette = generate_palette(origins.len());
        OriginColors {
            mapping: origins.iter().copied().zip(palette).collect(),
        }
    }

    /// Look up the colour for an origin. Gray for origins the dataset
    /// never produced.
    pub fn color_for(&self, origin: Origin) -> Color32 {
        self.mapping.get(&origin).copied().unwrap_or(Color32::GRAY)
    }
}
