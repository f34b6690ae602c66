//! The search-as-you-type widget, independent of any GUI toolkit

pub mod controller;
pub mod debounce;
pub mod render;
pub mod sequence;

pub use controller::{
    Effect, PointerTarget, SearchRequest, SearchWidget, WidgetSettings, WidgetState,
};
pub use debounce::Ticket;
pub use render::{ResultEntry, ResultsView};
pub use sequence::Generation;
