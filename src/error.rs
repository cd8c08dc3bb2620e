//! Error type shared by the record store and the tabular engine.

#[derive(Debug)]
pub enum EngineError {
    /// Sort requested on a key that is not a stream record field
    InvalidSortKey(String),
    /// Field value cannot be held in its comparable form (ISO date, integer count)
    Comparison { field: &'static str, value: String },
    DuplicateId(u64),
    InvalidRecord { id: u64, reason: String },
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Json(err)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidSortKey(key) => write!(f, "Invalid sort key: {}", key),
            EngineError::Comparison { field, value } => {
                write!(f, "Value {:?} is not comparable as {}", value, field)
            }
            EngineError::DuplicateId(id) => write!(f, "Duplicate record id: {}", id),
            EngineError::InvalidRecord { id, reason } => {
                write!(f, "Invalid record {}: {}", id, reason)
            }
            EngineError::Json(e) => write!(f, "JSON error: {}", e),
            EngineError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidSortKey("plays".to_string());
        assert_eq!(err.to_string(), "Invalid sort key: plays");

        let err = EngineError::Comparison {
            field: "dateStreamed",
            value: "Feb 3".to_string(),
        };
        assert_eq!(err.to_string(), "Value \"Feb 3\" is not comparable as dateStreamed");

        let err = EngineError::InvalidRecord {
            id: 7,
            reason: "artist is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid record 7: artist is empty");
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
