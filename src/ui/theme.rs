//! Theme configuration

use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Theme};

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const RATING: Color = Color::from_rgb(0.35, 0.8, 0.45);
    pub const WARNING: Color = Color::from_rgb(0.35, 0.3, 0.12);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
}

pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

pub fn search_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(DarkTheme::SURFACE),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        icon: DarkTheme::TEXT_MUTED,
        placeholder: DarkTheme::TEXT_PLACEHOLDER,
        value: DarkTheme::TEXT,
        selection: DarkTheme::PRIMARY,
    }
}

pub fn dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}

pub fn not_found(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::WARNING)),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}
