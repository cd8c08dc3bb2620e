//! Mock dataset generator for the dashboard
//!
//! Produces a full [`RecordStore`]: twelve months of user growth for 2024,
//! two revenue categories, the five top songs and a batch of recent stream
//! records. Output is deterministic for a given seed.

use {
    super::{
        dataset::{RecordStore, RevenueEntry, SongRank, UserGrowthPoint},
        record::StreamRecord,
    },
    crate::error::EngineError,
    chrono::NaiveDate,
    rand::{rngs::StdRng, Rng, SeedableRng},
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Top songs, already ranked by streams descending
pub fn top_songs() -> Vec<SongRank> {
    [
        ("HUMBLE", 1_200_000, "Kendric Lamar"),
        ("Gods Plan", 980_000, "Drake"),
        ("Stronger", 870_000, "Kanye West"),
        ("Lose Yourself", 760_000, "Eminem"),
        ("No Role Modelz", 650_000, "J Cole"),
    ]
    .into_iter()
    .map(|(name, streams, artist)| SongRank {
        name: name.to_string(),
        streams,
        artist: artist.to_string(),
    })
    .collect()
}

pub fn revenue() -> Vec<RevenueEntry> {
    vec![
        RevenueEntry {
            name: "Subscriptions".to_string(),
            value: 750_000,
        },
        RevenueEntry {
            name: "Advertisements".to_string(),
            value: 250_000,
        },
    ]
}

fn user_growth(rng: &mut StdRng) -> Vec<UserGrowthPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let i = i as u64;
            UserGrowthPoint {
                month: month.to_string(),
                total_users: 100_000 + i * 15_000 + rng.gen_range(0..5_000),
                active_users: 80_000 + i * 12_000 + rng.gen_range(0..4_000),
            }
        })
        .collect()
}

fn recent_streams(rng: &mut StdRng, songs: &[SongRank], count: usize) -> Vec<StreamRecord> {
    if songs.is_empty() {
        return Vec::new();
    }

    (1..=count as u64)
        .filter_map(|id| {
            // Song and artist are drawn independently
            let song = &songs[rng.gen_range(0..songs.len())];
            let artist = &songs[rng.gen_range(0..songs.len())];
            let day = rng.gen_range(1..=28);

            Some(StreamRecord {
                id,
                song_name: song.name.clone(),
                artist: artist.artist.clone(),
                date_streamed: NaiveDate::from_ymd_opt(2024, 2, day)?,
                stream_count: rng.gen_range(1_000..11_000),
                user_id: format!("USER{:06}", rng.gen_range(0..1_000_000)),
            })
        })
        .collect()
}

/// Generate a complete store from `seed`
pub fn generate(seed: u64, record_count: usize) -> Result<RecordStore, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let songs = top_songs();
    let growth = user_growth(&mut rng);
    let records = recent_streams(&mut rng, &songs, record_count);

    log::debug!(
        "Generated mock dataset (seed={}, records={})",
        seed,
        records.len()
    );

    RecordStore::new(records, growth, revenue(), songs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(7, 50).unwrap();
        let b = generate(7, 50).unwrap();
        assert_eq!(a, b);

        let c = generate(8, 50).unwrap();
        assert_ne!(a.records(), c.records());
    }

    #[test]
    fn test_generated_records_are_in_range() {
        let store = generate(42, DEFAULT_RECORD_COUNT).unwrap();
        assert_eq!(store.len(), DEFAULT_RECORD_COUNT);

        for (i, record) in store.records().iter().enumerate() {
            assert_eq!(record.id, i as u64 + 1);
            assert!((1_000..11_000).contains(&record.stream_count));
            assert_eq!(record.date_streamed.format("%Y-%m").to_string(), "2024-02");
            assert_eq!(record.user_id.len(), 10);
        }
    }

    #[test]
    fn test_generated_growth_series() {
        let store = generate(1, 0).unwrap();
        let growth = store.user_growth();

        assert_eq!(growth.len(), 12);
        assert_eq!(growth[0].month, "Jan");
        assert_eq!(growth[11].month, "Dec");
        assert!((265_000..270_000).contains(&growth[11].total_users));
        assert!((212_000..216_000).contains(&growth[11].active_users));
    }

    #[test]
    fn test_top_songs_ranked_descending() {
        let songs = top_songs();
        assert!(songs.windows(2).all(|w| w[0].streams >= w[1].streams));
        assert_eq!(songs[0].artist, "Kendric Lamar");
    }
}
