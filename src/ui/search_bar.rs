//! Search input

use iced::widget::text_input;
use iced::{Element, Length, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Widget id of the search field
pub const SEARCH_INPUT_ID: &str = "search-input";

pub fn view(query: &str) -> Element<'_, Message> {
    text_input("Поиск фильмов...", query)
        .id(text_input::Id::new(SEARCH_INPUT_ID))
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(Padding::new(16.0))
        .size(20)
        .width(Length::Fill)
        .style(theme::search_input)
        .into()
}
