#[cfg(test)]
mod tests {
    use {
        crate::{
            engine::{aggregate, filter, sort, FilterScope, SortDirection, TopArtistRanking},
            store::{mock, RecordField, RecordStore, StreamRecord},
        },
        chrono::NaiveDate,
    };

    fn dashboard_pair() -> Vec<StreamRecord> {
        vec![
            StreamRecord {
                id: 1,
                song_name: "HUMBLE".to_string(),
                artist: "Kendric Lamar".to_string(),
                date_streamed: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                stream_count: 500,
                user_id: "USER000001".to_string(),
            },
            StreamRecord {
                id: 2,
                song_name: "Stronger".to_string(),
                artist: "Kanye West".to_string(),
                date_streamed: NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
                stream_count: 900,
                user_id: "USER000002".to_string(),
            },
        ]
    }

    /// Filter then sort on the two-record dashboard sample
    #[test]
    fn test_end_to_end_scenario() {
        let records = dashboard_pair();

        let filtered = filter(&records, "kanye", FilterScope::All);
        assert_eq!(filtered.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);

        let sorted = sort(records.iter().collect(), RecordField::StreamCount, SortDirection::Descending);
        assert_eq!(sorted.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    /// Every artist-scoped match contains the query, and nothing outside does
    #[test]
    fn test_filter_correctness_on_mock_data() {
        let store = mock::generate(2024, 200).unwrap();
        let matched = filter(store.records(), "kendric", FilterScope::Artist);

        assert!(!matched.is_empty());
        assert!(matched.iter().all(|r| r.artist.to_lowercase().contains("kendric")));

        let outside = store
            .records()
            .iter()
            .filter(|r| !matched.iter().any(|m| m.id == r.id))
            .count();
        let expected_outside = store
            .records()
            .iter()
            .filter(|r| !r.artist.to_lowercase().contains("kendric"))
            .count();
        assert_eq!(outside, expected_outside);
    }

    /// A song-only match appears under All and Song, never under Artist
    #[test]
    fn test_scope_or_semantics() {
        let records = dashboard_pair();

        assert_eq!(filter(&records, "humble", FilterScope::All).len(), 1);
        assert_eq!(filter(&records, "humble", FilterScope::Song).len(), 1);
        assert!(filter(&records, "humble", FilterScope::Artist).is_empty());
    }

    /// Metrics of the generated dashboard dataset
    #[test]
    fn test_mock_dataset_metrics() {
        let store = mock::generate(42, 100).unwrap();
        let metrics = aggregate(
            store.user_growth(),
            store.revenue(),
            store.top_songs(),
            TopArtistRanking::TrustOrder,
        );

        assert_eq!(metrics.total_streams, 4_460_000);
        assert_eq!(metrics.revenue, 1_000_000);
        assert_eq!(metrics.top_artist.as_deref(), Some("Kendric Lamar"));
        assert_eq!(metrics.total_users, store.user_growth()[11].total_users);
    }

    #[test]
    fn test_empty_store_pipeline() {
        let store = RecordStore::default();
        let filtered = filter(store.records(), "anything", FilterScope::All);
        assert!(sort(filtered, RecordField::Artist, SortDirection::Ascending).is_empty());

        let metrics = aggregate(&[], &[], &[], TopArtistRanking::Explicit);
        assert_eq!(metrics.total_streams, 0);
        assert!(metrics.top_artist.is_none());
    }
}
