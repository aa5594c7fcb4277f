/// All entity identifiers are backend-assigned opaque strings
/// (the `_id` field of each JSON document).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
