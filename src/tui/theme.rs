//! Theme module for centralized color and style definitions
//!
//! Two palettes, dark and light, selected at runtime by the persisted
//! [`ThemePreference`]. The dot palette mirrors the session display: a
//! single indigo in dark mode, cycling pastels in light mode.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::ThemePreference;
use crate::timer::Phase;

/// Dot colors for light mode, cycled per dot
const LIGHT_DOT_COLORS: [Color; 5] = [
    Color::Rgb(0xFF, 0x9F, 0x9F),
    Color::Rgb(0xFF, 0xD6, 0xA5),
    Color::Rgb(0xFF, 0xFE, 0xC4),
    Color::Rgb(0xCB, 0xFF, 0xA9),
    Color::Rgb(0xA0, 0xD2, 0xFF),
];

/// Single dot color for dark mode
const DARK_DOT_COLORS: [Color; 1] = [Color::Rgb(0x8A, 0x85, 0xFF)];

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === UI Elements ===
    /// Screen background
    pub background: Color,
    /// Primary accent color (title, borders of the timer dial)
    pub accent: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,

    // === Timer Phases ===
    /// Countdown actively running
    pub phase_running: Color,
    /// Countdown paused
    pub phase_paused: Color,
    /// Ready to start
    pub phase_idle: Color,

    // === Banners ===
    /// Status banner foreground (persistence failures)
    pub warning_fg: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,

    /// Colors for completed-session dots, cycled per dot
    dot_colors: &'static [Color],
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            accent: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            phase_running: Color::Green,
            phase_paused: Color::Yellow,
            phase_idle: Color::DarkGray,
            warning_fg: Color::Yellow,
            border: Color::White,
            dot_colors: &DARK_DOT_COLORS,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            accent: Color::Blue,
            text: Color::Black,
            text_muted: Color::Gray,
            phase_running: Color::Green,
            phase_paused: Color::Rgb(0xB0, 0x6A, 0x00),
            phase_idle: Color::Gray,
            warning_fg: Color::Rgb(0xB0, 0x6A, 0x00),
            border: Color::Black,
            dot_colors: &LIGHT_DOT_COLORS,
        }
    }

    /// Select the palette for a theme preference
    pub fn for_preference(pref: ThemePreference) -> Self {
        if pref.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Color for the nth completed-session dot
    pub fn dot_color(&self, index: usize) -> Color {
        self.dot_colors[index % self.dot_colors.len()]
    }

    /// Color for a timer phase
    pub fn phase_color(&self, phase: Phase) -> Color {
        match phase {
            Phase::Running => self.phase_running,
            Phase::Paused => self.phase_paused,
            Phase::Idle => self.phase_idle,
        }
    }

    // === Style Builders ===

    /// Style for the title header
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the countdown readout
    pub fn timer_style(&self, phase: Phase) -> Style {
        Style::default()
            .fg(self.phase_color(phase))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the status banner
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning_fg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_for_preference() {
        assert_eq!(
            Theme::for_preference(ThemePreference::Dark).accent,
            Color::Cyan
        );
        assert_eq!(
            Theme::for_preference(ThemePreference::Light).accent,
            Color::Blue
        );
    }

    #[test]
    fn test_dark_dots_are_uniform() {
        let theme = Theme::dark();
        assert_eq!(theme.dot_color(0), theme.dot_color(7));
    }

    #[test]
    fn test_light_dots_cycle() {
        let theme = Theme::light();
        assert_ne!(theme.dot_color(0), theme.dot_color(1));
        assert_eq!(theme.dot_color(0), theme.dot_color(5));
    }

    #[test]
    fn test_phase_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.phase_color(Phase::Running), Color::Green);
        assert_eq!(theme.phase_color(Phase::Paused), Color::Yellow);
        assert_eq!(theme.phase_color(Phase::Idle), Color::DarkGray);
    }
}
