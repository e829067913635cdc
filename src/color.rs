use std::collections::HashMap;

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
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (years) to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map; hues are handed out in `categories` order.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = categories.into_iter().map(Into::into).collect();
        let palette = generate_palette(labels.len());
        let mapping = labels.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn hues_follow_category_order() {
        let cm = ColorMap::new(["2007", "2015", "2025"]);
        assert_eq!(cm.color_for("2007"), generate_palette(3)[0]);
        assert_eq!(cm.color_for("2025"), generate_palette(3)[2]);
        assert_ne!(cm.color_for("2007"), cm.color_for("2025"));
        assert_eq!(cm.color_for("1999"), Color32::GRAY);
    }
}
