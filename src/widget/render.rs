//! Results rendering
//!
//! Backend text is untrusted. It is kept as plain strings in [`ResultsView`]
//! (the GUI draws it with text widgets) and escaped when exported as HTML.

use maud::{html, Markup, Render};

use crate::backend::SearchResult;

/// Notice shown for a successful search with no matches
pub const NOT_FOUND_MESSAGE: &str = "Фильмы не найдены";

/// Route of the full listing page for a query
pub fn search_route(query: &str) -> String {
    format!("/?query={}", urlencoding::encode(query))
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    NotFound,
    Entries(Vec<ResultEntry>),
}

/// One dropdown row, every field already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub href: String,
    pub title: String,
    pub rating: String,
    pub director: String,
    pub year: String,
    pub genre: String,
}

impl From<&SearchResult> for ResultEntry {
    fn from(movie: &SearchResult) -> Self {
        Self {
            href: search_route(&movie.title),
            title: movie.title.clone(),
            rating: format!("{}/10", movie.rating),
            director: movie.director.clone(),
            year: movie.year.to_string(),
            genre: movie.genre.clone(),
        }
    }
}

impl ResultsView {
    /// Build the view in backend order
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            ResultsView::NotFound
        } else {
            ResultsView::Entries(results.iter().map(ResultEntry::from).collect())
        }
    }

    pub fn entry(&self, index: usize) -> Option<&ResultEntry> {
        match self {
            ResultsView::NotFound => None,
            ResultsView::Entries(entries) => entries.get(index),
        }
    }

    /// Plain text listing, one line per entry
    pub fn to_text(&self) -> String {
        match self {
            ResultsView::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ResultsView::Entries(entries) => entries
                .iter()
                .map(|e| {
                    format!(
                        "{}  {}  {} • {} • {}  ({})",
                        e.title, e.rating, e.director, e.year, e.genre, e.href
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Dropdown markup; maud escapes every interpolated value
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for ResultsView {
    fn render(&self) -> Markup {
        match self {
            ResultsView::NotFound => html! {
                div class="alert alert-warning text-center" { (NOT_FOUND_MESSAGE) }
            },
            ResultsView::Entries(entries) => html! {
                div class="list-group" {
                    @for e in entries {
                        a href=(e.href) class="list-group-item list-group-item-action" {
                            div class="d-flex w-100 justify-content-between" {
                                h6 class="mb-1" { (e.title) }
                                small class="text-success" { (e.rating) }
                            }
                            p class="mb-1 small" {
                                (e.director) " • " (e.year) " • " (e.genre)
                            }
                        }
                    }
                }
            },
        }
    }
}
