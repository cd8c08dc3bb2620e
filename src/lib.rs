//! Streamify analytics dashboard
//!
//! The `engine` module is the tabular core: filter, stable sort and summary
//! aggregation over an immutable `store::RecordStore`, composed by
//! `engine::ViewController`. The `ui` module is a terminal renderer that
//! feeds key presses into the controller as discrete events.

#[cfg(test)]
mod tests;

pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod ui;

pub use config::DashboardConfig;
pub use engine::{
    FilterScope, FilterState, SortConfig, SortDirection, SummaryMetrics, TopArtistRanking,
    ViewController,
};
pub use error::EngineError;
pub use store::{DataSource, RecordField, RecordStore, StreamRecord};
