// ui/theme.rs - WorldClock Visual Theme
//
// Accent colors and widget styles shared by the views. Backgrounds and text
// follow the active iced theme so light and dark both work.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use worldclock::config::ThemeMode;

use crate::constants::window::RADIUS;

/// Color palette for WorldClock
pub mod colors {
    use iced::Color;

    pub const ACCENT: Color = Color::from_rgb(0.35, 0.55, 0.95);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.45, 0.65, 1.0);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.28, 0.46, 0.85);

    pub const BORDER: Color = Color::from_rgba(0.5, 0.5, 0.6, 0.25);
    pub const MENU_HOVER: Color = Color::from_rgba(0.35, 0.55, 0.95, 0.2);
}

/// Map the configured mode to an iced theme
pub fn theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
    }
}

/// Rounded panel around the location controls
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Dropdown list under the select button
pub fn menu(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::ACCENT_HOVER,
        button::Status::Pressed => colors::ACCENT_PRESSED,
        button::Status::Active | button::Status::Disabled => colors::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors::MENU_HOVER))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
