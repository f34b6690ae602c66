//! Core application state and Iced Application implementation
//!
//! Hosts one [`SearchWidget`] and runs the effects it asks for: debounce
//! timers, backend requests and browser navigation.

use iced::widget::{column, container, mouse_area, text, text_input};
use iced::{event, mouse, task, window, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::{SearchClient, SearchError, SearchResult};
use crate::config::Config;
use crate::native::browser;
use crate::ui::{results, search_bar, theme};
use crate::widget::{
    Effect, Generation, PointerTarget, SearchRequest, SearchWidget, Ticket, WidgetState,
};

/// Regions whose presses do not dismiss the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Input,
    Results,
}

#[derive(Debug, Default)]
struct Hover {
    input: bool,
    results: bool,
}

impl Hover {
    fn target(&self) -> PointerTarget {
        if self.input {
            PointerTarget::Input
        } else if self.results {
            PointerTarget::Results
        } else {
            PointerTarget::Outside
        }
    }
}

pub struct MovieSearch {
    query: String,
    widget: SearchWidget,
    client: SearchClient,
    config: Config,
    timer: Option<task::Handle>,
    hover: Hover,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    DebounceElapsed(Ticket),
    SearchComplete(Generation, Result<Vec<SearchResult>, SearchError>),
    OpenResult(usize),
    Hover(Anchor, bool),
    PointerPressed,
    CloseRequested(window::Id),
}

impl MovieSearch {
    pub fn new(config: Config, client: SearchClient) -> (Self, Task<Message>) {
        let mut widget = SearchWidget::new(config.widget_settings());
        widget.mount();

        let app = Self {
            query: String::new(),
            widget,
            client,
            config,
            timer: None,
            hover: Hover::default(),
        };

        (
            app,
            text_input::focus(text_input::Id::new(search_bar::SEARCH_INPUT_ID)),
        )
    }

    pub fn title(&self) -> String {
        String::from("Movie Search")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::InputChanged(value) => {
                self.query = value;
                self.abort_timer();
                let effect = self.widget.on_input(&self.query);
                self.run(effect)
            }

            Message::Submit => {
                let effect = self.widget.on_submit(&self.query);
                self.run(effect)
            }

            Message::DebounceElapsed(ticket) => {
                tracing::trace!(query = ticket.query(), "debounce elapsed");
                let effect = self.widget.on_timer(ticket);
                if effect.is_some() {
                    self.timer = None;
                }
                self.run(effect)
            }

            Message::SearchComplete(generation, outcome) => {
                self.widget.on_response(generation, outcome);
                Task::none()
            }

            Message::OpenResult(index) => {
                let effect = self.widget.open_result(index);
                self.run(effect)
            }

            Message::Hover(Anchor::Input, inside) => {
                self.hover.input = inside;
                Task::none()
            }

            Message::Hover(Anchor::Results, inside) => {
                self.hover.results = inside;
                Task::none()
            }

            Message::PointerPressed => {
                self.widget.on_pointer_press(self.hover.target());
                Task::none()
            }

            Message::CloseRequested(id) => {
                self.abort_timer();
                self.widget.unmount();
                window::close(id)
            }
        };

        // A hidden dropdown never reports its exit
        if !self.widget.panel().is_visible() {
            self.hover.results = false;
        }

        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = mouse_area(search_bar::view(&self.query))
            .on_enter(Message::Hover(Anchor::Input, true))
            .on_exit(Message::Hover(Anchor::Input, false));

        let panel = self.widget.panel();
        let below: Element<'_, Message> = match panel.view() {
            Some(view) if panel.is_visible() => mouse_area(results::view(view))
                .on_enter(Message::Hover(Anchor::Results, true))
                .on_exit(Message::Hover(Anchor::Results, false))
                .into(),
            _ => container(
                text(match self.widget.state() {
                    WidgetState::Pending => "Поиск...",
                    _ => "Начните вводить название, режиссёра или жанр",
                })
                .size(14)
                .color(theme::DarkTheme::TEXT_MUTED),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
        };

        container(column![input, below].spacing(12))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::window)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let close = window::close_requests().map(Message::CloseRequested);

        if self.widget.is_mounted() {
            Subscription::batch([close, event::listen_with(pointer_pressed)])
        } else {
            close
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Effects
    // ========================================================================

    fn run(&mut self, effect: Option<Effect>) -> Task<Message> {
        match effect {
            None => Task::none(),

            Some(Effect::Schedule { ticket, delay }) => {
                let sleep = async move { tokio::time::sleep(delay).await };
                let (task, handle) =
                    Task::perform(sleep, move |_| Message::DebounceElapsed(ticket.clone()))
                        .abortable();
                self.timer = Some(handle);
                task
            }

            Some(Effect::Dispatch(SearchRequest { generation, query })) => {
                let client = self.client.clone();
                Task::perform(async move { client.search(&query).await }, move |outcome| {
                    Message::SearchComplete(generation, outcome)
                })
            }

            Some(Effect::Navigate(route)) => {
                let url = self.config.resolve(&route);
                if let Err(e) = browser::open_url(&url) {
                    tracing::warn!("{}", e);
                }
                Task::none()
            }
        }
    }

    fn abort_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

fn pointer_pressed(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_target() {
        let mut hover = Hover::default();
        assert_eq!(hover.target(), PointerTarget::Outside);

        hover.results = true;
        assert_eq!(hover.target(), PointerTarget::Results);

        hover.input = true;
        assert_eq!(hover.target(), PointerTarget::Input);
    }

    fn app() -> MovieSearch {
        let config = Config::default();
        let client = SearchClient::new(&config.base_url, config.request_timeout()).unwrap();
        MovieSearch::new(config, client).0
    }

    #[test]
    fn test_typing_holds_one_timer() {
        let mut app = app();

        let _ = app.update(Message::InputChanged("inc".to_string()));
        assert!(app.timer.is_some());
        assert_eq!(app.widget.state(), WidgetState::Pending);

        let _ = app.update(Message::InputChanged("ince".to_string()));
        assert!(app.timer.is_some());

        let _ = app.update(Message::InputChanged("i".to_string()));
        assert!(app.timer.is_none());
        assert_eq!(app.widget.state(), WidgetState::Cleared);
    }

    #[test]
    fn test_close_request_unmounts() {
        let mut app = app();
        let _ = app.update(Message::InputChanged("inception".to_string()));

        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert!(app.timer.is_none());
        assert!(!app.widget.is_mounted());
    }
}
