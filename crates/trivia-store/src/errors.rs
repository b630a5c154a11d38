//! Error handling for trivia-store
//!
//! Builds trivia-core `TrError`s with store-specific context

use trivia_core::errors::{TrError, TrErrorKind};

/// Result type alias using TrError
pub type Result<T> = std::result::Result<T, TrError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> TrError {
    TrError::new(TrErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> TrError {
    TrError::new(TrErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> TrError {
    TrError::new(TrErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> TrError {
    TrError::new(TrErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> TrError {
    TrError::new(TrErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> TrError {
    TrError::new(TrErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rusqlite_is_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), TrErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }

    #[test]
    fn test_seed_validation_is_invalid_input() {
        let err = seed_validation("bad seed");
        assert_eq!(err.kind(), TrErrorKind::InvalidInput);
        assert_eq!(err.message(), "bad seed");
    }
}
