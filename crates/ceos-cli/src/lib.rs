//! CLI library components for the CEOS record inspector.

pub mod logging;
pub mod output;
pub mod selection;
