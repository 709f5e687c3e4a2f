use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::sync::RwLock;

use crate::cards::UtilizationLevel;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Utilization tiers
    UtilizationNormal,
    UtilizationNearCapacity,
    UtilizationOverallocated,

    // Entity colors
    Team,
    OrgUnit,
    Role,
    Skill,
    Member,

    // UI colors
    Header,
    Border,
    Selection,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Secondary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: std::collections::HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = std::collections::HashMap::new();

        // Utilization tiers: green / amber / red
        colors.insert(SemanticColor::UtilizationNormal, Color::Green);
        colors.insert(SemanticColor::UtilizationNearCapacity, Color::Yellow);
        colors.insert(SemanticColor::UtilizationOverallocated, Color::Red);

        // Entity colors
        colors.insert(SemanticColor::Team, Color::Cyan);
        colors.insert(SemanticColor::OrgUnit, Color::Magenta);
        colors.insert(SemanticColor::Role, Color::Blue);
        colors.insert(SemanticColor::Skill, Color::Cyan);
        colors.insert(SemanticColor::Member, Color::Green);

        // UI colors
        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 76, b: 121 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Selection, Color::BrightYellow);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        // Text colors
        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 180, g: 180, b: 180 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME.read().unwrap().get(semantic)
}

/// Set the global theme
pub fn set_theme(theme: ColorTheme) {
    *THEME.write().unwrap() = theme;
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;

    pub fn utilization_color(level: UtilizationLevel) -> SemanticColor {
        match level {
            UtilizationLevel::Normal => SemanticColor::UtilizationNormal,
            UtilizationLevel::NearCapacity => SemanticColor::UtilizationNearCapacity,
            UtilizationLevel::Overallocated => SemanticColor::UtilizationOverallocated,
        }
    }

    /// Alert glyph shown next to overallocated utilization figures.
    pub fn utilization_glyph(level: UtilizationLevel) -> &'static str {
        match level {
            UtilizationLevel::Overallocated => "▲",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::{utilization_color, utilization_glyph};
    use super::*;

    #[test]
    fn test_default_theme_tiers() {
        let theme = ColorTheme::new();
        assert_eq!(theme.get(SemanticColor::UtilizationNormal), Color::Green);
        assert_eq!(theme.get(SemanticColor::UtilizationNearCapacity), Color::Yellow);
        assert_eq!(theme.get(SemanticColor::UtilizationOverallocated), Color::Red);
    }

    #[test]
    fn test_utilization_color_helper() {
        assert_eq!(
            utilization_color(UtilizationLevel::Normal),
            SemanticColor::UtilizationNormal
        );
        assert_eq!(
            utilization_color(UtilizationLevel::NearCapacity),
            SemanticColor::UtilizationNearCapacity
        );
        assert_eq!(
            utilization_color(UtilizationLevel::Overallocated),
            SemanticColor::UtilizationOverallocated
        );
    }

    #[test]
    fn test_set_theme_overrides_color() {
        let mut theme = ColorTheme::new();
        theme.set(SemanticColor::Team, Color::Magenta);
        set_theme(theme);
        assert_eq!(theme_color(SemanticColor::Team), Color::Magenta);
        set_theme(ColorTheme::new());
    }

    #[test]
    fn test_alert_glyph_only_when_overallocated() {
        assert_eq!(utilization_glyph(UtilizationLevel::Overallocated), "▲");
        assert_eq!(utilization_glyph(UtilizationLevel::NearCapacity), "");
        assert_eq!(utilization_glyph(UtilizationLevel::Normal), "");
    }
}
