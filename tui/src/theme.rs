//! Color theme and glyphs for the lecture TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use lecture_types::Icon;
use lecture_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_CODE: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_code: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub link: Color,
    pub code: Color,
    pub warning: Color,
    pub error: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_code: colors::BG_CODE,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            link: colors::BLUE,
            code: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            peach: colors::ORANGE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_code: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            link: Color::Cyan,
            code: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            peach: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for controls, icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub previous: &'static str,
    pub next: &'static str,
    pub completed: &'static str,
    pub not_completed: &'static str,
    pub placeholder: &'static str,
    pub bullet: &'static str,
    pub code_gutter: &'static str,
    pub callout_bar: &'static str,
    pub separator: &'static str,
    pub slide_keys: &'static str,
    pub scroll_keys: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub laptop: &'static str,
    pub server: &'static str,
    pub database: &'static str,
    pub spinner_frames: &'static [&'static str],
}

impl Glyphs {
    #[must_use]
    pub fn icon(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Laptop => self.laptop,
            Icon::Server => self.server,
            Icon::Database => self.database,
            Icon::ArrowDown => self.arrow_down,
        }
    }

    #[must_use]
    pub fn completion(&self, completed: bool) -> &'static str {
        if completed {
            self.completed
        } else {
            self.not_completed
        }
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            previous: "<",
            next: ">",
            completed: "[x]",
            not_completed: "[ ]",
            placeholder: "...",
            bullet: "*",
            code_gutter: "|",
            callout_bar: "|",
            separator: "|",
            slide_keys: "n/p",
            scroll_keys: "j/k",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            laptop: "[pc]",
            server: "[srv]",
            database: "[db]",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            previous: "◀",
            next: "▶",
            completed: "✅",
            not_completed: "❌",
            placeholder: "░░░░░░░░░░░░░░░░",
            bullet: "•",
            code_gutter: "│",
            callout_bar: "▌",
            separator: "│",
            slide_keys: "←/→",
            scroll_keys: "↑/↓",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            laptop: "💻",
            server: "📦",
            database: "▦",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn lecture_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn inline_code(palette: &Palette) -> Style {
        Style::default().fg(palette.accent).bg(palette.bg_code)
    }

    #[must_use]
    pub fn code_block(palette: &Palette) -> Style {
        Style::default().fg(palette.code).bg(palette.bg_code)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Previous/next controls stay visible at the bounds, just dimmed.
    #[must_use]
    pub fn control(palette: &Palette, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text_disabled)
                .add_modifier(Modifier::DIM)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
