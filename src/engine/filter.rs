use crate::store::StreamRecord;

/// Which record field(s) a text filter is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterScope {
    #[default]
    All,
    Song,
    Artist,
}

impl FilterScope {
    /// Parse a scope selector value; unknown values fall back to `All`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "all" => FilterScope::All,
            "song" => FilterScope::Song,
            "artist" => FilterScope::Artist,
            other => {
                log::warn!("Unknown filter scope '{}', defaulting to all", other);
                FilterScope::All
            }
        }
    }

    /// Next scope in selector order (All -> Song -> Artist -> All)
    pub fn next(self) -> Self {
        match self {
            FilterScope::All => FilterScope::Song,
            FilterScope::Song => FilterScope::Artist,
            FilterScope::Artist => FilterScope::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterScope::All => "All",
            FilterScope::Song => "Song Name",
            FilterScope::Artist => "Artist",
        }
    }
}

/// Text query plus field scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub query: String,
    pub scope: FilterScope,
}

impl FilterState {
    pub fn new(query: impl Into<String>, scope: FilterScope) -> Self {
        Self {
            query: query.into(),
            scope,
        }
    }

    /// Query as used for matching: trimmed and lowercased
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn matches(&self, record: &StreamRecord) -> bool {
        matches_normalized(record, &self.normalized_query(), self.scope)
    }
}

fn matches_normalized(record: &StreamRecord, needle: &str, scope: FilterScope) -> bool {
    if needle.is_empty() {
        return true;
    }

    let song = || record.song_name.to_lowercase().contains(needle);
    let artist = || record.artist.to_lowercase().contains(needle);

    match scope {
        FilterScope::Song => song(),
        FilterScope::Artist => artist(),
        FilterScope::All => artist() || song(),
    }
}

/// Records whose scoped field(s) contain `query`, case-insensitively.
///
/// Relative order of the input is preserved. An empty (or all-whitespace)
/// query lets every record through.
pub fn filter<'a, I>(records: I, query: &str, scope: FilterScope) -> Vec<&'a StreamRecord>
where
    I: IntoIterator<Item = &'a StreamRecord>,
{
    let needle = query.trim().to_lowercase();

    records
        .into_iter()
        .filter(|record| matches_normalized(record, &needle, scope))
        .collect()
}
