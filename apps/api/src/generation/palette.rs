//! Colour resolution: template palette slots plus light/dark surface tokens.

use crate::generation::model::{TemplateView, Theme};

pub const DEFAULT_PRIMARY: &str = "#4f46e5";
pub const DEFAULT_SECONDARY: &str = "#7c3aed";
pub const DEFAULT_ACCENT: &str = "#ec4899";
pub const DEFAULT_NEUTRAL: &str = "#f9fafb";

/// The four template colour slots, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
}

impl Palette {
    /// Missing or empty slots fall back to the fixed defaults.
    pub fn from_colors(colors: &[String]) -> Self {
        let slot = |i: usize, default: &str| {
            colors
                .get(i)
                .filter(|c| !c.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Palette {
            primary: slot(0, DEFAULT_PRIMARY),
            secondary: slot(1, DEFAULT_SECONDARY),
            accent: slot(2, DEFAULT_ACCENT),
            neutral: slot(3, DEFAULT_NEUTRAL),
        }
    }

    pub fn for_template(template: &TemplateView) -> Self {
        Self::from_colors(&template.colors)
    }
}

/// Surface and text colours that flip with the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Surfaces {
    pub text: &'static str,
    pub page_bg: &'static str,
    pub section_bg: &'static str,
    pub alt_section_bg: &'static str,
    /// Profile card background. Light themes use the palette's neutral slot.
    pub card_bg: String,
    pub raised_bg: &'static str,
    pub raised_border: &'static str,
    pub border: &'static str,
    /// Profile name colour. Light themes use the palette's primary slot.
    pub name_text: String,
    pub strong_text: &'static str,
    pub body_text: &'static str,
    pub subtle_text: &'static str,
    pub muted_text: &'static str,
    pub chip_bg: &'static str,
    pub chip_text: &'static str,
    pub chip_border: &'static str,
    pub scroll_track: &'static str,
}

impl Surfaces {
    pub fn new(theme: Theme, palette: &Palette) -> Self {
        if theme.is_dark() {
            Surfaces {
                text: "#f3f4f6",
                page_bg: "#111827",
                section_bg: "#1f2937",
                alt_section_bg: "#111827",
                card_bg: "#374151".to_string(),
                raised_bg: "#374151",
                raised_border: "#4b5563",
                border: "#374151",
                name_text: "#ffffff".to_string(),
                strong_text: "#ffffff",
                body_text: "#d1d5db",
                subtle_text: "#d1d5db",
                muted_text: "#9ca3af",
                chip_bg: "#4b5563",
                chip_text: "#f3f4f6",
                chip_border: "#6b7280",
                scroll_track: "#1f2937",
            }
        } else {
            Surfaces {
                text: "#1f2937",
                page_bg: "#ffffff",
                section_bg: "#ffffff",
                alt_section_bg: "#f9fafb",
                card_bg: palette.neutral.clone(),
                raised_bg: "#ffffff",
                raised_border: "#e5e7eb",
                border: "#e5e7eb",
                name_text: palette.primary.clone(),
                strong_text: "#1f2937",
                body_text: "#4b5563",
                subtle_text: "#6b7280",
                muted_text: "#6b7280",
                chip_bg: "#f3f4f6",
                chip_text: "#374151",
                chip_border: "#e5e7eb",
                scroll_track: "#f1f1f1",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_palette_fills_defaults() {
        let palette = Palette::from_colors(&["#111111".to_string()]);
        assert_eq!(palette.primary, "#111111");
        assert_eq!(palette.secondary, DEFAULT_SECONDARY);
        assert_eq!(palette.accent, DEFAULT_ACCENT);
        assert_eq!(palette.neutral, DEFAULT_NEUTRAL);
    }

    #[test]
    fn test_empty_slot_falls_back() {
        let palette = Palette::from_colors(&["".to_string(), "#222222".to_string()]);
        assert_eq!(palette.primary, DEFAULT_PRIMARY);
        assert_eq!(palette.secondary, "#222222");
    }

    #[test]
    fn test_light_card_uses_neutral_slot() {
        let palette = Palette::from_colors(&[
            "#1".to_string(),
            "#2".to_string(),
            "#3".to_string(),
            "#444444".to_string(),
        ]);
        assert_eq!(Surfaces::new(Theme::Light, &palette).card_bg, "#444444");
        assert_eq!(Surfaces::new(Theme::Dark, &palette).card_bg, "#374151");
    }
}
