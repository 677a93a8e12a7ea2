//! Portal footer: info links, version line and social buttons

use iced::widget::{button, column, container, horizontal_rule, row, text, Space};
use iced::{Alignment, Background, Element, Length, Padding};

use super::theme::{self, PortalTheme};
use super::NavAction;
use crate::app::Message;

const INFO_LINKS: [&str; 5] = ["О портале", "Поставщикам", "Новости", "Контакты", "Карта сайта"];

const SUPPORT_LINKS: [(&str, &str); 2] = [
    ("🎧", "Служба качества"),
    ("❓", "Написать в службу поддержки"),
];

pub const SOCIAL_LINKS: [(&str, &str); 5] = [
    ("f", "https://facebook.com"),
    ("t", "https://twitter.com"),
    ("ig", "https://instagram.com"),
    ("ВК", "https://vk.com"),
    ("YT", "https://youtube.com"),
];

const VERSION_LINE: &str = "© 2017-2018 2.0.5";
const COMPLIANCE_LINE: &str = "Портал Поставщиков работает в соответствии с 44-ФЗ";

fn link<'a>(label: String, action: NavAction) -> Element<'a, Message> {
    button(text(label).size(13))
        .on_press(Message::Nav(action))
        .padding(Padding::from([4.0, 6.0]))
        .style(theme::ghost_button)
        .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let info = row(INFO_LINKS
        .iter()
        .map(|label| link(label.to_string(), NavAction::Log(*label))))
    .spacing(24);

    let support = row(SUPPORT_LINKS
        .iter()
        .map(|(icon, label)| link(format!("{} {}", icon, label), NavAction::Log(*label))))
    .spacing(12);

    let social = row(SOCIAL_LINKS.iter().map(|(label, url)| {
        button(text(*label).size(11))
            .on_press(Message::Nav(NavAction::External(*url)))
            .width(32)
            .height(32)
            .style(theme::accent_button)
            .into()
    }))
    .spacing(8);

    let legal = column![
        text(VERSION_LINE).size(11).color(PortalTheme::TEXT_MUTED),
        text(COMPLIANCE_LINE).size(11).color(PortalTheme::TEXT_MUTED)
    ];

    container(
        column![
            row![info, Space::with_width(Length::Fill), support].align_y(Alignment::Center),
            horizontal_rule(1),
            row![legal, Space::with_width(Length::Fill), social].align_y(Alignment::Center)
        ]
        .spacing(12),
    )
    .padding(Padding::from([16.0, 24.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(PortalTheme::SURFACE_MUTED)),
        ..Default::default()
    })
    .into()
}
