//! History panel and result cards

use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use super::theme::{self, PortalTheme};
use crate::app::Message;
use crate::backend::types::{ResultKind, SearchResult};
use crate::search::{SearchHistoryEntry, SmartSearch, MAX_RATING};

fn stars<'a>(rating: u8) -> Element<'a, Message> {
    row((1..=MAX_RATING).map(|i| {
        let color = if i <= rating {
            PortalTheme::STAR
        } else {
            PortalTheme::STAR_EMPTY
        };
        text("★").size(12).color(color).into()
    }))
    .spacing(2)
    .into()
}

fn history_item(entry: &SearchHistoryEntry) -> Element<'_, Message> {
    let mut item = row![
        column![
            text(entry.query).size(14),
            text(entry.timestamp).size(11).color(PortalTheme::TEXT_MUTED)
        ]
        .width(Length::Fill)
    ]
    .align_y(Alignment::Center);

    if let Some(rating) = entry.rating {
        item = item.push(stars(rating));
    }

    button(item)
        .on_press(Message::HistoryPicked(entry.id))
        .padding(Padding::from([8.0, 12.0]))
        .width(Length::Fill)
        .style(theme::ghost_button)
        .into()
}

pub fn history_panel(search: &SmartSearch) -> Element<'_, Message> {
    let items = column(search.history().iter().map(history_item)).spacing(4);

    container(
        column![
            text("🕘 История поиска").size(14),
            items
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

fn kind_badge<'a>(kind: ResultKind) -> Element<'a, Message> {
    let (label, background, color) = match kind {
        ResultKind::Create => ("Создание", PortalTheme::ACCENT, iced::Color::WHITE),
        ResultKind::Search => ("Поиск", PortalTheme::SURFACE_MUTED, PortalTheme::TEXT),
    };

    container(text(label).size(12).color(color))
        .padding(Padding::from([2.0, 8.0]))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border::default().rounded(6),
            ..Default::default()
        })
        .into()
}

fn result_card(result: &SearchResult) -> Element<'_, Message> {
    let mut body = column![
        row![
            kind_badge(result.kind),
            text(format!("Уверенность: {}%", result.confidence))
                .size(12)
                .color(PortalTheme::TEXT_MUTED)
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(&result.title).size(18),
        text(&result.description).size(14).color(PortalTheme::TEXT_MUTED),
    ]
    .spacing(8);

    if let (Some(amount), Some(category)) = (&result.amount, &result.category) {
        body = body.push(
            row![
                text(format!("Сумма: {} руб.", amount)).size(14),
                text(format!("Категория: {}", category)).size(14)
            ]
            .spacing(24),
        );
    }

    let call_to_action = match result.kind {
        ResultKind::Create => "Создать форму →",
        ResultKind::Search => "Показать результаты →",
    };
    body = body.push(text(call_to_action).size(14).color(PortalTheme::ACCENT));

    let clickable = mouse_area(container(body).width(Length::Fill))
        .on_press(Message::ResultActivated(result.id.clone()));

    let rating = row((1..=MAX_RATING).map(|value| {
        button(text("☆").size(16).color(PortalTheme::STAR))
            .on_press(Message::ResultRated {
                result_id: result.id.clone(),
                stars: value,
            })
            .padding(4)
            .style(theme::ghost_button)
            .into()
    }))
    .spacing(2);

    container(row![clickable, rating].spacing(24))
        .padding(24)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

pub fn results_list(search: &SmartSearch) -> Element<'_, Message> {
    let cards = column(search.results().iter().map(result_card)).spacing(16);

    column![text("Результаты поиска").size(22), Space::with_height(4), cards]
        .spacing(8)
        .into()
}
