//! Search widget controller
//!
//! Owns the debounce timer state, request sequencing and the results panel.
//! Handlers never perform I/O; they return an [`Effect`] for the host to run.

use std::time::Duration;

use crate::backend::{SearchError, SearchResult};

use super::debounce::{Debouncer, Ticket};
use super::render::{search_route, ResultsView};
use super::sequence::{Generation, RequestSequencer};

/// Tunables shared by every widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

/// Work the host must carry out on the controller's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a timer and hand `ticket` back through [`SearchWidget::on_timer`]
    Schedule { ticket: Ticket, delay: Duration },
    /// Send the search and report through [`SearchWidget::on_response`]
    Dispatch(SearchRequest),
    /// Leave for a full page route such as `/?query=...`
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub query: String,
}

/// Where a pointer press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    Results,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Pending,
    Cleared,
}

/// The dropdown area. Content survives dismissal; only a render replaces it.
#[derive(Debug, Default)]
pub struct ResultsPanel {
    view: Option<ResultsView>,
    visible: bool,
}

impl ResultsPanel {
    pub fn view(&self) -> Option<&ResultsView> {
        self.view.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self, view: ResultsView) {
        self.view = Some(view);
        self.visible = true;
    }

    fn clear(&mut self) {
        self.view = None;
        self.visible = false;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug)]
pub struct SearchWidget {
    settings: WidgetSettings,
    mounted: bool,
    state: WidgetState,
    debouncer: Debouncer,
    sequencer: RequestSequencer,
    panel: ResultsPanel,
}

impl SearchWidget {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            settings,
            mounted: false,
            state: WidgetState::Idle,
            debouncer: Debouncer::new(settings.debounce),
            sequencer: RequestSequencer::new(),
            panel: ResultsPanel::default(),
        }
    }

    pub fn mount(&mut self) {
        if !self.mounted {
            tracing::debug!("search widget mounted");
            self.mounted = true;
        }
    }

    /// Detach: nothing pending survives and late responses are ignored
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!(pending = self.debouncer.is_pending(), "search widget unmounted");
            self.debouncer.cancel();
            self.sequencer.invalidate();
            self.panel.hide();
            self.state = WidgetState::Idle;
            self.mounted = false;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    /// Input value changed
    pub fn on_input(&mut self, value: &str) -> Option<Effect> {
        if !self.mounted {
            return None;
        }

        self.debouncer.cancel();
        let query = value.trim();

        if query.is_empty() || query.chars().count() < self.settings.min_query_len {
            self.panel.clear();
            self.sequencer.invalidate();
            self.state = WidgetState::Cleared;
            return None;
        }

        let ticket = self.debouncer.schedule(query.to_string());
        self.state = WidgetState::Pending;
        Some(Effect::Schedule {
            ticket,
            delay: self.debouncer.delay(),
        })
    }

    /// A debounce timer elapsed
    pub fn on_timer(&mut self, ticket: Ticket) -> Option<Effect> {
        if !self.mounted {
            return None;
        }

        let query = self.debouncer.fire(ticket)?;
        self.state = WidgetState::Idle;
        let generation = self.sequencer.begin();
        tracing::debug!(?generation, %query, "dispatching search");
        Some(Effect::Dispatch(SearchRequest { generation, query }))
    }

    /// A dispatched search finished
    pub fn on_response(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) {
        if !self.mounted || !self.sequencer.is_current(generation) {
            tracing::debug!(?generation, "discarding stale search response");
            return;
        }

        match outcome {
            Ok(results) => {
                tracing::debug!(?generation, count = results.len(), "rendering results");
                self.panel.show(ResultsView::from_results(&results));
            }
            Err(e) => {
                tracing::warn!(?generation, "search failed: {}", e);
            }
        }
    }

    pub fn on_pointer_press(&mut self, target: PointerTarget) {
        if self.mounted && target == PointerTarget::Outside {
            self.panel.hide();
        }
    }

    /// Enter pressed in the input
    pub fn on_submit(&self, value: &str) -> Option<Effect> {
        let query = value.trim();
        if !self.mounted || query.is_empty() {
            return None;
        }
        Some(Effect::Navigate(search_route(query)))
    }

    /// A dropdown entry was clicked
    pub fn open_result(&self, index: usize) -> Option<Effect> {
        if !self.mounted || !self.panel.visible {
            return None;
        }
        let entry = self.panel.view.as_ref()?.entry(index)?;
        Some(Effect::Navigate(entry.href.clone()))
    }
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new(WidgetSettings::default())
    }
}
