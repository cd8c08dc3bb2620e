use {
    crate::store::{RevenueEntry, SongRank, UserGrowthPoint},
    serde::Serialize,
};

/// How the top artist is picked from the song series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopArtistRanking {
    /// First entry wins; the series must already be ranked by streams descending
    #[default]
    TrustOrder,
    /// Highest `streams` wins, first entry on ties
    Explicit,
}

impl TopArtistRanking {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "trust" | "trust_order" => Some(TopArtistRanking::TrustOrder),
            "explicit" | "rank" => Some(TopArtistRanking::Explicit),
            _ => None,
        }
    }
}

/// Snapshot shown on the summary cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_users: u64,
    pub active_users: u64,
    pub total_streams: u64,
    pub revenue: u64,
    pub top_artist: Option<String>,
}

/// Derive summary metrics from the full, unfiltered aggregate datasets.
///
/// User counts come from the latest growth bucket (last entry), not a sum.
/// Empty inputs produce zeros and no top artist.
pub fn aggregate(
    user_growth: &[UserGrowthPoint],
    revenue: &[RevenueEntry],
    songs: &[SongRank],
    ranking: TopArtistRanking,
) -> SummaryMetrics {
    let (total_users, active_users) = user_growth
        .last()
        .map(|latest| (latest.total_users, latest.active_users))
        .unwrap_or((0, 0));

    let total_streams = songs
        .iter()
        .fold(0u64, |acc, song| acc.saturating_add(song.streams));

    let revenue = revenue
        .iter()
        .fold(0u64, |acc, entry| acc.saturating_add(entry.value));

    let top_song = match ranking {
        TopArtistRanking::TrustOrder => songs.first(),
        // max_by_key returns the last maximum; reverse to keep the first
        TopArtistRanking::Explicit => songs.iter().rev().max_by_key(|song| song.streams),
    };

    SummaryMetrics {
        total_users,
        active_users,
        total_streams,
        revenue,
        top_artist: top_song.map(|song| song.artist.clone()),
    }
}
