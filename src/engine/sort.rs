use {
    crate::{
        error::EngineError,
        store::{RecordField, StreamRecord},
    },
    std::cmp::Ordering,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Arrow shown next to the active column header
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortConfig {
    pub key: RecordField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest streams first
    fn default() -> Self {
        Self {
            key: RecordField::DateStreamed,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    pub fn new(key: RecordField, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click on `field`: same key flips direction, a new key starts ascending
    pub fn request(&mut self, field: RecordField) {
        if self.key == field {
            self.direction = self.direction.flip();
        } else {
            self.key = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Header click by key name. An unknown key leaves the config untouched.
    pub fn request_key(&mut self, key: &str) -> Result<(), EngineError> {
        let field = RecordField::parse(key)?;
        self.request(field);
        Ok(())
    }
}

/// Order `records` by `key`.
///
/// The sort is stable: records that compare equal on `key` keep their
/// relative input order in both directions.
pub fn sort<'a>(
    mut records: Vec<&'a StreamRecord>,
    key: RecordField,
    direction: SortDirection,
) -> Vec<&'a StreamRecord> {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
    records
}
