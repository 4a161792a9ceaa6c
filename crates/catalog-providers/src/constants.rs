//! Store constants

/// Table used when the configuration names none
pub const DEFAULT_TABLE_NAME: &str = "products";

/// Pool size used when the configuration names none
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled connection
pub const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Registry key of the `Arc<dyn KeyValueTable>` foundation
pub const KEY_VALUE_TABLE: &str = "keyValueTable";

/// Registry key of the key-value table name (`String`)
pub const KEY_VALUE_TABLE_NAME: &str = "keyValueTableName";

/// Registry key of the relational connection pool (`PgPool`)
pub const DB_POOL: &str = "dbPool";

/// Registry key of the relational table name (`String`)
pub const DB_TABLE_NAME: &str = "dbTableName";
