use {
    crate::error::EngineError,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::cmp::Ordering,
};

/// A single play event shown in the "Recent Streams" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    pub id: u64,
    pub song_name: String,
    pub artist: String,
    pub date_streamed: NaiveDate,
    pub stream_count: u64,
    pub user_id: String,
}

/// Value kind of a record field, determines the comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Count,
}

/// Sortable fields of a [`StreamRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    SongName,
    Artist,
    DateStreamed,
    StreamCount,
    UserId,
}

impl RecordField {
    /// Columns of the stream table, in display order
    pub const TABLE_COLUMNS: [RecordField; 5] = [
        RecordField::SongName,
        RecordField::Artist,
        RecordField::DateStreamed,
        RecordField::StreamCount,
        RecordField::UserId,
    ];

    /// Parse a field key.
    ///
    /// Accepts the camelCase record key (`songName`), the snake_case key
    /// (`song_name`) and the table header label (`Song Name`). Matching is
    /// case-insensitive and ignores spaces and underscores.
    pub fn parse(key: &str) -> Result<Self, EngineError> {
        let normalized: String = key
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "id" => Ok(RecordField::Id),
            "songname" => Ok(RecordField::SongName),
            "artist" => Ok(RecordField::Artist),
            "datestreamed" => Ok(RecordField::DateStreamed),
            "streamcount" => Ok(RecordField::StreamCount),
            "userid" => Ok(RecordField::UserId),
            _ => Err(EngineError::InvalidSortKey(key.to_string())),
        }
    }

    /// Record key as it appears in serialized records
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::SongName => "songName",
            RecordField::Artist => "artist",
            RecordField::DateStreamed => "dateStreamed",
            RecordField::StreamCount => "streamCount",
            RecordField::UserId => "userId",
        }
    }

    /// Header label used by the stream table
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Id => "ID",
            RecordField::SongName => "Song Name",
            RecordField::Artist => "Artist",
            RecordField::DateStreamed => "Date Streamed",
            RecordField::StreamCount => "Stream Count",
            RecordField::UserId => "User ID",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            RecordField::SongName | RecordField::Artist | RecordField::UserId => FieldKind::Text,
            RecordField::DateStreamed => FieldKind::Date,
            RecordField::Id | RecordField::StreamCount => FieldKind::Count,
        }
    }

    /// Compare two records on this field using the field's natural ordering
    pub fn compare(&self, a: &StreamRecord, b: &StreamRecord) -> Ordering {
        match self {
            RecordField::Id => a.id.cmp(&b.id),
            RecordField::SongName => a.song_name.cmp(&b.song_name),
            RecordField::Artist => a.artist.cmp(&b.artist),
            RecordField::DateStreamed => a.date_streamed.cmp(&b.date_streamed),
            RecordField::StreamCount => a.stream_count.cmp(&b.stream_count),
            RecordField::UserId => a.user_id.cmp(&b.user_id),
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for RecordField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::parse(s)
    }
}

/// `USER` followed by exactly six ASCII digits
pub fn is_valid_user_id(user_id: &str) -> bool {
    match user_id.strip_prefix("USER") {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
