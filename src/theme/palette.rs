//! Palettes selected by the visual root marker

use log::{info, warn};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use super::parser::SerializableColor;
use super::preference::ThemePreference;
use super::root::ClassList;

const BUNDLED_PALETTE: &str = include_str!("../../assets/palette.yml");

/// Semantic colour roles for one appearance preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: SerializableColor,
    pub surface: SerializableColor,
    pub border: SerializableColor,
    pub border_active: SerializableColor,
    pub text: SerializableColor,
    pub muted: SerializableColor,
    pub accent: SerializableColor,
    pub highlight: SerializableColor,
    pub correct: SerializableColor,
    pub incorrect: SerializableColor,
    pub selection_bg: SerializableColor,
    pub selection_fg: SerializableColor,
}

impl Palette {
    pub fn background(&self) -> Color {
        self.background.0
    }

    pub fn surface(&self) -> Color {
        self.surface.0
    }

    pub fn text(&self) -> Color {
        self.text.0
    }

    pub fn muted(&self) -> Color {
        self.muted.0
    }

    pub fn accent(&self) -> Color {
        self.accent.0
    }

    pub fn highlight(&self) -> Color {
        self.highlight.0
    }

    pub fn correct(&self) -> Color {
        self.correct.0
    }

    pub fn incorrect(&self) -> Color {
        self.incorrect.0
    }

    /// Style of the root frame.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text.0).bg(self.background.0)
    }

    /// Style of a pane, with its border highlighted when `active`.
    pub fn pane(&self, active: bool) -> Style {
        let border = if active { self.border_active.0 } else { self.border.0 };
        Style::default().fg(border).bg(self.surface.0)
    }

    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.selection_fg.0)
            .bg(self.selection_bg.0)
            .add_modifier(Modifier::BOLD)
    }
}

/// Falls back to plain terminal colours.
impl Default for Palette {
    fn default() -> Self {
        let c = SerializableColor;
        Self {
            background: c(Color::Reset),
            surface: c(Color::Reset),
            border: c(Color::Gray),
            border_active: c(Color::Cyan),
            text: c(Color::Reset),
            muted: c(Color::Gray),
            accent: c(Color::LightCyan),
            highlight: c(Color::Yellow),
            correct: c(Color::Green),
            incorrect: c(Color::Red),
            selection_bg: c(Color::Yellow),
            selection_fg: c(Color::Black),
        }
    }
}

/// Dark and light palettes.
///
/// As with class-based dark mode on the web, the dark palette applies only
/// while the root carries the `dark` marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub dark: Palette,
    #[serde(default)]
    pub light: Palette,
}

impl StyleSheet {
    /// Parses the palette file shipped with the binary.
    pub fn bundled() -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(BUNDLED_PALETTE)
    }

    pub fn for_preference(&self, preference: ThemePreference) -> &Palette {
        match preference {
            ThemePreference::Dark => &self.dark,
            ThemePreference::Light => &self.light,
        }
    }

    pub fn for_root(&self, root: &ClassList) -> &Palette {
        if root.contains(ThemePreference::Dark.marker()) {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Load the bundled style sheet, with fallback to terminal colours
pub fn load_style_sheet() -> StyleSheet {
    match StyleSheet::bundled() {
        Ok(sheet) => {
            info!("Loaded bundled palette");
            sheet
        }
        Err(e) => {
            warn!("Failed to parse bundled palette: {e}. Using terminal colours.");
            StyleSheet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::root::VisualRoot;

    #[test]
    fn test_bundled_palette_parses() {
        let sheet = StyleSheet::bundled().unwrap();
        assert_eq!(sheet.dark.background(), Color::Rgb(0x10, 0x16, 0x1a));
        assert_eq!(sheet.light.background(), Color::Rgb(0xff, 0xff, 0xff));
        assert_ne!(sheet.dark, sheet.light);
    }

    #[test]
    fn test_partial_palette_uses_defaults() {
        let yaml = "dark:\n  accent: \"#bd93f9\"\n";
        let sheet: StyleSheet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sheet.dark.accent(), Color::Rgb(189, 147, 249));
        assert_eq!(sheet.dark.muted(), Color::Gray);
        assert_eq!(sheet.light, Palette::default());
    }

    #[test]
    fn test_root_marker_selects_palette() {
        let sheet = StyleSheet::bundled().unwrap();
        let mut root = ClassList::new();
        assert_eq!(sheet.for_root(&root), &sheet.light);
        root.add_marker("dark");
        assert_eq!(sheet.for_root(&root), &sheet.dark);
        assert_eq!(sheet.for_root(&root), sheet.for_preference(ThemePreference::Dark));
    }
}
