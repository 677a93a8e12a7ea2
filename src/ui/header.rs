//! Portal header: logo, navigation and the signed-in user

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use super::theme::{self, PortalTheme};
use super::NavAction;
use crate::app::Message;

const NAVIGATION: [(&str, &str, &str); 3] = [
    ("💡", "Центр поддержки", "Открыть центр поддержки"),
    ("🛒", "Корзина", "Открыть корзину"),
    ("📍", "Московская область", "Выбрать регион"),
];

const USER_NAME: &str = "Александр Семёнов";
const USER_ORG: &str = "ПО «Склады»";
const USER_INITIALS: &str = "АС";

fn nav_button<'a>(label: String, log: &'static str) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(Message::Nav(NavAction::Log(log)))
        .padding(Padding::from([6.0, 10.0]))
        .style(theme::ghost_button)
        .into()
}

fn logo<'a>() -> Element<'a, Message> {
    let mark = container(text("П").size(14).color(Color::WHITE))
        .width(32)
        .height(32)
        .center_x(32)
        .center_y(32)
        .style(|_theme| container::Style {
            background: Some(Background::Color(PortalTheme::ACCENT)),
            border: Border::default().rounded(4),
            ..Default::default()
        });

    row![
        mark,
        column![
            text("ПОРТАЛ").size(14),
            text("ПОСТАВЩИКОВ").size(11).color(PortalTheme::TEXT_MUTED)
        ]
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn user<'a>() -> Element<'a, Message> {
    let avatar = container(text(USER_INITIALS).size(12))
        .width(32)
        .height(32)
        .center_x(32)
        .center_y(32)
        .style(|_theme| container::Style {
            background: Some(Background::Color(PortalTheme::SURFACE_MUTED)),
            border: Border::default().rounded(16),
            ..Default::default()
        });

    row![
        column![
            text(USER_NAME).size(14),
            text(USER_ORG).size(11).color(PortalTheme::TEXT_MUTED)
        ]
        .align_x(Alignment::End),
        avatar
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let left = row![logo(), nav_button("Меню".to_string(), "Открыть меню")]
        .spacing(16)
        .align_y(Alignment::Center);

    let center = row(NAVIGATION
        .iter()
        .map(|(icon, label, log)| nav_button(format!("{} {}", icon, label), *log)))
    .spacing(12)
    .align_y(Alignment::Center);

    let right = row![
        nav_button("🔍".to_string(), "Открыть поиск"),
        nav_button("🔔".to_string(), "Открыть уведомления"),
        user()
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(
        row![
            left,
            Space::with_width(Length::Fill),
            center,
            Space::with_width(Length::Fill),
            right
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([10.0, 24.0]))
    .width(Length::Fill)
    .style(theme::bar)
    .into()
}
