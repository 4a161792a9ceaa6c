//! Application constants

/// Format of timestamps in use case output (`2024-01-31 17:45:00`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
