/// Global type definitions
///
/// Constants shared by the library and the demo binary

/// Bucket count used when no configuration is given
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Environment variable consulted for log filters
pub const LOG_ENV: &str = "RUST_LOG";
