//! Runtime configuration for the extraction service.
//!
//! Everything that used to be ambient state (debug flag, concurrency width)
//! is an explicit value threaded into the pipeline entry points.

use chrono_tz::Tz;
use std::path::PathBuf;

/// Timezone the exchange publishes its update stamps in. Stamps on the page
/// are wall-clock times in this zone, not the caller's.
pub const EXCHANGE_TZ: Tz = chrono_tz::Europe::Moscow;

/// Quotes whose update stamp is older than this are unusable and dropped.
pub const STALE_AFTER_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the HTTP API.
    pub port: u16,
    /// Max branch cards parsed concurrently per extraction pass.
    pub concurrency: usize,
    /// Page navigation timeout. Bounds the wall clock of a whole pass, since
    /// everything downstream of navigation is local CPU work.
    pub page_timeout_ms: u64,
    /// Debug logging.
    pub debug: bool,
    /// Chromium binary override; auto-discovery when unset.
    pub chromium_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            concurrency: 3,
            page_timeout_ms: 30_000,
            debug: false,
            chromium_path: None,
        }
    }
}
