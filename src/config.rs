//! Dashboard configuration from environment variables

use {
    crate::{engine::TopArtistRanking, store::mock::DEFAULT_RECORD_COUNT},
    std::env,
};

/// Configuration for the dashboard binary
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// JSON snapshot to load instead of generating mock data
    pub data_path: Option<String>,

    /// Seed for the mock data generator
    pub seed: u64,

    /// Number of mock stream records
    pub record_count: usize,

    /// Top artist selection policy
    pub ranking: TopArtistRanking,

    /// Maximum rows rendered in the stream table
    pub table_rows: usize,

    pub rust_log: String,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `STREAMIFY_DATA_PATH` (default: unset, mock data is generated)
    /// - `STREAMIFY_SEED` (default: 42)
    /// - `STREAMIFY_RECORD_COUNT` (default: 100)
    /// - `STREAMIFY_TOP_ARTIST_RANKING` (`trust` | `explicit`, default: trust)
    /// - `STREAMIFY_TABLE_ROWS` (default: 50)
    /// - `RUST_LOG` (default: info)
    pub fn from_env() -> Self {
        let ranking = match env::var("STREAMIFY_TOP_ARTIST_RANKING") {
            Ok(value) => TopArtistRanking::parse(&value).unwrap_or_else(|| {
                log::warn!(
                    "Invalid STREAMIFY_TOP_ARTIST_RANKING '{}', defaulting to trust",
                    value
                );
                TopArtistRanking::TrustOrder
            }),
            Err(_) => TopArtistRanking::TrustOrder,
        };

        Self {
            data_path: env::var("STREAMIFY_DATA_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),

            seed: env::var("STREAMIFY_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(42),

            record_count: env::var("STREAMIFY_RECORD_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RECORD_COUNT),

            ranking,

            table_rows: env::var("STREAMIFY_TABLE_ROWS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases run in one test since they share process environment
    #[test]
    fn test_config_from_env() {
        // Test: Default configuration when no env vars set
        env::remove_var("STREAMIFY_DATA_PATH");
        env::remove_var("STREAMIFY_SEED");
        env::remove_var("STREAMIFY_RECORD_COUNT");
        env::remove_var("STREAMIFY_TOP_ARTIST_RANKING");
        env::remove_var("STREAMIFY_TABLE_ROWS");

        let config = DashboardConfig::from_env();

        assert_eq!(config.data_path, None);
        assert_eq!(config.seed, 42);
        assert_eq!(config.record_count, 100);
        assert_eq!(config.ranking, TopArtistRanking::TrustOrder);
        assert_eq!(config.table_rows, 50);

        // Test: Custom configuration, unparsable numbers fall back
        env::set_var("STREAMIFY_DATA_PATH", "/tmp/streams.json");
        env::set_var("STREAMIFY_SEED", "7");
        env::set_var("STREAMIFY_RECORD_COUNT", "many");
        env::set_var("STREAMIFY_TOP_ARTIST_RANKING", "explicit");
        env::set_var("STREAMIFY_TABLE_ROWS", "20");

        let config = DashboardConfig::from_env();

        assert_eq!(config.data_path.as_deref(), Some("/tmp/streams.json"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.record_count, 100);
        assert_eq!(config.ranking, TopArtistRanking::Explicit);
        assert_eq!(config.table_rows, 20);

        // Cleanup
        env::remove_var("STREAMIFY_DATA_PATH");
        env::remove_var("STREAMIFY_SEED");
        env::remove_var("STREAMIFY_RECORD_COUNT");
        env::remove_var("STREAMIFY_TOP_ARTIST_RANKING");
        env::remove_var("STREAMIFY_TABLE_ROWS");
    }
}
