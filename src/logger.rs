use std::sync::Once;

use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::types::LOG_ENV;

static INIT: Once = Once::new();

/// Install the process-wide logger
///
/// Defaults to `info`; `RUST_LOG` overrides it. Safe to call more than once.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chainstore", LevelFilter::Info)
            .filter_module("chainstore::infrastructure::hash_table", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_env(Env::new().filter(LOG_ENV));

        // Another logger may already be installed (tests, embedding binaries)
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_logging_levels() {
        initialize_logger();
        initialize_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
