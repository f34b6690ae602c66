//! Results dropdown
//!
//! Titles and other backend strings only ever reach `text` widgets, which
//! draw them verbatim.

use iced::widget::{column, container, mouse_area, row, scrollable, text, Space};
use iced::{mouse, Element, Length, Padding};

use crate::app::Message;
use crate::ui::theme::{self, DarkTheme};
use crate::widget::render::NOT_FOUND_MESSAGE;
use crate::widget::{ResultEntry, ResultsView};

/// Widget id of the dropdown
pub const SEARCH_RESULTS_ID: &str = "search-results";

pub fn view(results: &ResultsView) -> Element<'_, Message> {
    let body: Element<'_, Message> = match results {
        ResultsView::NotFound => container(text(NOT_FOUND_MESSAGE).size(15).color(DarkTheme::TEXT))
            .padding(12)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::not_found)
            .into(),
        ResultsView::Entries(entries) => scrollable(
            column(entries.iter().enumerate().map(|(i, entry)| entry_row(i, entry))).spacing(4),
        )
        .into(),
    };

    container(body)
        .id(container::Id::new(SEARCH_RESULTS_ID))
        .padding(4)
        .width(Length::Fill)
        .style(theme::dropdown)
        .into()
}

fn entry_row(index: usize, entry: &ResultEntry) -> Element<'_, Message> {
    let details = format!("{} • {} • {}", entry.director, entry.year, entry.genre);

    let content = column![
        row![
            text(&entry.title).size(15).color(DarkTheme::TEXT),
            Space::with_width(Length::Fill),
            text(&entry.rating).size(12).color(DarkTheme::RATING),
        ]
        .align_y(iced::Alignment::Center),
        text(details).size(12).color(DarkTheme::TEXT_MUTED),
    ]
    .spacing(2);

    mouse_area(
        container(content)
            .padding(Padding::from([10.0, 12.0]))
            .width(Length::Fill),
    )
    .on_press(Message::OpenResult(index))
    .interaction(mouse::Interaction::Pointer)
    .into()
}
