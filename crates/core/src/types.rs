/// Primary key type for all entity tables (PostgreSQL `BIGSERIAL`).
pub type DbId = i64;

/// All timestamps are stored and exchanged as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
