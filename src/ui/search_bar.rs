//! Search box, submit button, example chips and the notice line

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use super::theme::{self, PortalTheme};
use crate::app::Message;
use crate::search::{SmartSearch, QUICK_EXAMPLES};

const PLACEHOLDER: &str =
    "Например: \"Создай КС на 300 тыс. на канцелярию\" или \"Найти контракты на мебель\"";

pub fn view(search: &SmartSearch) -> Element<'_, Message> {
    let input = container(
        row![
            text("✨").size(18).color(PortalTheme::ACCENT),
            text_input(PLACEHOLDER, search.query())
                .on_input(Message::QueryChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(Padding::new(12.0))
                .size(16)
                .style(|_theme, _status| text_input::Style {
                    background: Background::Color(Color::TRANSPARENT),
                    border: Border::default(),
                    icon: PortalTheme::TEXT_MUTED,
                    placeholder: PortalTheme::TEXT_MUTED,
                    value: PortalTheme::TEXT,
                    selection: PortalTheme::STAR,
                })
        ]
        .spacing(4)
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([4.0, 12.0]))
    .width(Length::Fill)
    .style(theme::card);

    let history_toggle = button(text("🕘").size(18))
        .on_press(Message::HistoryToggled)
        .padding(Padding::new(12.0))
        .style(theme::ghost_button);

    let submit_label = if search.is_loading() {
        "Обрабатываю..."
    } else {
        "🔍 Найти"
    };
    let submit = button(text(submit_label).size(16))
        .on_press_maybe((!search.is_loading()).then_some(Message::SearchSubmitted))
        .padding(Padding::from([14.0, 28.0]))
        .style(theme::accent_button);

    let examples = row(QUICK_EXAMPLES.iter().map(|(label, query)| {
        button(text(*label).size(13))
            .on_press(Message::ExamplePicked(*query))
            .padding(Padding::from([6.0, 16.0]))
            .style(theme::chip_button)
            .into()
    }))
    .spacing(12);

    let mut content = column![
        text("Умный поиск по закупкам").size(28),
        text("Введите запрос на естественном языке для поиска или создания закупок")
            .size(14)
            .color(PortalTheme::TEXT_MUTED),
        Space::with_height(12),
        row![input, history_toggle, submit]
            .spacing(12)
            .align_y(Alignment::Center),
        examples,
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    if let Some(notice) = search.notice() {
        content = content.push(notice_line(notice));
    }

    content.into()
}

fn notice_line(notice: &str) -> Element<'_, Message> {
    container(
        row![
            text(notice).size(13).color(PortalTheme::ACCENT_HOVER),
            Space::with_width(Length::Fill),
            button(text("✕").size(12))
                .on_press(Message::NoticeDismissed)
                .style(theme::ghost_button)
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([6.0, 12.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(Color::from_rgb(1.0, 0.95, 0.95))),
        border: Border::default().rounded(8),
        ..Default::default()
    })
    .into()
}
