use {
    super::record::{is_valid_user_id, StreamRecord},
    crate::error::EngineError,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, path::Path},
};

/// One monthly bucket of the user-growth series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGrowthPoint {
    pub month: String,
    pub total_users: u64,
    pub active_users: u64,
}

/// Revenue category (whole dollars)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub name: String,
    pub value: u64,
}

/// Entry of the ranked song series, expected in descending `streams` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRank {
    pub name: String,
    pub streams: u64,
    pub artist: String,
}

/// Stream record as read from a snapshot, before schema validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStreamRecord {
    id: u64,
    song_name: String,
    artist: String,
    date_streamed: String,
    stream_count: serde_json::Value,
    user_id: String,
}

impl RawStreamRecord {
    fn into_record(self) -> Result<StreamRecord, EngineError> {
        let date_streamed = NaiveDate::parse_from_str(&self.date_streamed, "%Y-%m-%d")
            .map_err(|_| EngineError::Comparison {
                field: "dateStreamed",
                value: self.date_streamed.clone(),
            })?;

        let stream_count = self.stream_count.as_u64().ok_or_else(|| EngineError::Comparison {
            field: "streamCount",
            value: self.stream_count.to_string(),
        })?;

        Ok(StreamRecord {
            id: self.id,
            song_name: self.song_name,
            artist: self.artist,
            date_streamed,
            stream_count,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    recent_streams: Vec<RawStreamRecord>,
    #[serde(default)]
    user_growth_data: Vec<UserGrowthPoint>,
    #[serde(default)]
    revenue_data: Vec<RevenueEntry>,
    #[serde(default)]
    top_songs: Vec<SongRank>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    recent_streams: &'a [StreamRecord],
    user_growth_data: &'a [UserGrowthPoint],
    revenue_data: &'a [RevenueEntry],
    top_songs: &'a [SongRank],
}

/// Immutable in-memory collection of stream records plus the aggregate
/// datasets the summary metrics are derived from.
///
/// Records are validated once, at construction. Nothing hands out mutable
/// access afterwards; a refresh builds a new store and swaps it in whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<StreamRecord>,
    user_growth: Vec<UserGrowthPoint>,
    revenue: Vec<RevenueEntry>,
    top_songs: Vec<SongRank>,
    /// Record id -> position in `records`
    index: HashMap<u64, usize>,
}

impl RecordStore {
    pub fn new(
        records: Vec<StreamRecord>,
        user_growth: Vec<UserGrowthPoint>,
        revenue: Vec<RevenueEntry>,
        top_songs: Vec<SongRank>,
    ) -> Result<Self, EngineError> {
        let index = validate_records(&records)?;

        Ok(Self {
            records,
            user_growth,
            revenue,
            top_songs,
            index,
        })
    }

    /// Build a store from a JSON snapshot document
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;

        let records = raw
            .recent_streams
            .into_iter()
            .map(RawStreamRecord::into_record)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records, raw.user_growth_data, raw.revenue_data, raw.top_songs)
    }

    /// Load a JSON snapshot from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        log::info!(
            "📂 Loaded {} stream records from {}",
            store.records.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        let snapshot = SnapshotRef {
            recent_streams: &self.records,
            user_growth_data: &self.user_growth,
            revenue_data: &self.revenue,
            top_songs: &self.top_songs,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    pub fn records(&self) -> &[StreamRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&StreamRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn user_growth(&self) -> &[UserGrowthPoint] {
        &self.user_growth
    }

    pub fn revenue(&self) -> &[RevenueEntry] {
        &self.revenue
    }

    pub fn top_songs(&self) -> &[SongRank] {
        &self.top_songs
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check every record against the schema and build the id index
fn validate_records(records: &[StreamRecord]) -> Result<HashMap<u64, usize>, EngineError> {
    let mut index = HashMap::with_capacity(records.len());

    for (pos, record) in records.iter().enumerate() {
        let invalid = |reason: &str| EngineError::InvalidRecord {
            id: record.id,
            reason: reason.to_string(),
        };

        if record.id == 0 {
            return Err(invalid("id must be positive"));
        }
        if index.insert(record.id, pos).is_some() {
            return Err(EngineError::DuplicateId(record.id));
        }
        if record.song_name.trim().is_empty() {
            return Err(invalid("songName is empty"));
        }
        if record.artist.trim().is_empty() {
            return Err(invalid("artist is empty"));
        }
        if record.stream_count == 0 {
            return Err(invalid("streamCount must be positive"));
        }
        if !is_valid_user_id(&record.user_id) {
            return Err(EngineError::InvalidRecord {
                id: record.id,
                reason: format!("userId {:?} is not USER + 6 digits", record.user_id),
            });
        }
    }

    Ok(index)
}
