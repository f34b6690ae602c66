//! View building blocks

pub mod results;
pub mod search_bar;
pub mod theme;
