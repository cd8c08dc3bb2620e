//! Record Store: stream records and the aggregate datasets behind the
//! summary cards.

pub mod dataset;
pub mod mock;
pub mod record;
pub mod source;

pub use dataset::{RecordStore, RevenueEntry, SongRank, UserGrowthPoint};
pub use record::{FieldKind, RecordField, StreamRecord};
pub use source::DataSource;
