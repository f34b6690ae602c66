//! Desktop integration

pub mod browser;
