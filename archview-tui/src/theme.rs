//! Color tokens for the architecture viewer.
//!
//! Dark background with neon accents for focus and status, plus one color per
//! catalog accent name so each view and module card keeps its identity.
//!
//! # Color Palette
//! - **Background**: Deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, keys, info status)
//! - **Warning**: Neon orange (badges, warnings)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, collapsed content)

use ratatui::style::{Color, Modifier, Style};

use archview_core::Accent;

/// Viewer theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon orange (warnings, badges)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, hints)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub const fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Terminal color for a catalog accent name.
    pub fn accent_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Gray => Color::Rgb(156, 163, 175),
            Accent::Slate => Color::Rgb(100, 116, 139),
            Accent::Indigo => Color::Rgb(129, 140, 248),
            Accent::Emerald => Color::Rgb(52, 211, 153),
            Accent::Blue => Color::Rgb(96, 165, 250),
            Accent::Purple => Color::Rgb(192, 132, 252),
            Accent::Amber => Color::Rgb(251, 191, 36),
        }
    }
}

const THEME: Theme = Theme::neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

/// Foreground in a catalog accent color.
pub fn tinted(accent: Accent) -> Style {
    Style::default().fg(THEME.accent_color(accent))
}

/// Border of the content frame; bright while it has keyboard focus.
pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

/// A category button in the navigation bar.
///
/// Highlighted buttons (owning the active view) are filled with the view's
/// accent; the keyboard cursor adds an underline.
pub fn nav_button(accent: Accent, highlighted: bool, cursor: bool) -> Style {
    let style = if highlighted {
        Style::default()
            .fg(THEME.background)
            .bg(THEME.accent_color(accent))
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    };
    if cursor {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Glyph drawn in front of a module card title, by catalog icon name.
pub fn icon_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "bar-chart" => "📊",
        "book-open" => "📖",
        "building" => "🏢",
        "calendar" => "📅",
        "clock" => "🕒",
        "credit-card" => "💳",
        "database" => "💾",
        "folder-tree" => "📁",
        "globe" => "🌐",
        "graduation-cap" => "🎓",
        "languages" => "🔤",
        "link" => "🔗",
        "play" => "🎬",
        "search" => "🔍",
        "settings" => "🔧",
        "shield" => "🔒",
        "tent" => "⛺",
        "upload" => "📤",
        "user" => "👤",
        "user-check" => "👥",
        "video" => "📹",
        _ => return None,
    };
    Some(glyph)
}

/// The highlighted row of an open dropdown or the content cursor.
pub fn selected_row() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.accent)
        .add_modifier(Modifier::BOLD)
}
