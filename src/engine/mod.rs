//! Tabular data engine
//!
//! ```text
//! RecordStore ──► filter (query, scope) ──► sort (key, direction) ──► view
//!      │
//!      └────────► aggregate ──► SummaryMetrics
//! ```
//!
//! All operations are pure, synchronous transformations over borrowed
//! records. `ViewController` composes them and owns the UI state.

pub mod filter;
pub mod metrics;
pub mod sort;
pub mod view;

pub use filter::{filter, FilterScope, FilterState};
pub use metrics::{aggregate, SummaryMetrics, TopArtistRanking};
pub use sort::{sort, SortConfig, SortDirection};
pub use view::ViewController;
