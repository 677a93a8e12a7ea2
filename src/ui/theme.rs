//! Theme configuration

use iced::{Background, Border, Color};
use iced::widget::{button, container};

/// Portal light palette
pub struct PortalTheme;

impl PortalTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.98, 0.98, 0.98);
    pub const SURFACE: Color = Color::WHITE;
    pub const SURFACE_MUTED: Color = Color::from_rgb(0.95, 0.96, 0.96);
    pub const BORDER: Color = Color::from_rgb(0.88, 0.88, 0.9);
    /// Portal red, used for the logo, primary buttons and "create" badges
    pub const ACCENT: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.73, 0.11, 0.11);
    pub const TEXT: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const STAR: Color = Color::from_rgb(0.98, 0.8, 0.08);
    pub const STAR_EMPTY: Color = Color::from_rgb(0.82, 0.84, 0.86);
}

pub fn card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PortalTheme::SURFACE)),
        border: Border {
            color: PortalTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn bar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PortalTheme::SURFACE)),
        border: Border {
            color: PortalTheme::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Solid red pill: primary actions, social links, the "create" badge
pub fn accent_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => PortalTheme::ACCENT_HOVER,
        button::Status::Disabled => PortalTheme::TEXT_MUTED,
        button::Status::Active => PortalTheme::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border::default().rounded(10),
        ..button::Style::default()
    }
}

/// Borderless text button used throughout the header and footer
pub fn ghost_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(PortalTheme::SURFACE_MUTED)),
        _ => None,
    };
    button::Style {
        background,
        text_color: PortalTheme::TEXT,
        border: Border::default().rounded(6),
        ..button::Style::default()
    }
}

pub fn chip_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Color::from_rgb(1.0, 0.95, 0.95), PortalTheme::ACCENT_HOVER)
        }
        _ => (PortalTheme::SURFACE_MUTED, PortalTheme::TEXT),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: PortalTheme::BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..button::Style::default()
    }
}
