use std::path::PathBuf;

use super::*;

pub const DEFAULT_MODAL_DELAY_MS: u64 = 300;
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 100;
pub const DEFAULT_MODAL_FADE_OUT_MS: u64 = 300;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5_000;
/// 5 MiB, the common browser localStorage budget.
pub const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
        }
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            report_endpoint: String::new(),
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl Default for JourneyTimings {
    fn default() -> Self {
        Self {
            modal_delay_ms: DEFAULT_MODAL_DELAY_MS,
            confirm_delay_ms: DEFAULT_CONFIRM_DELAY_MS,
            modal_fade_out_ms: DEFAULT_MODAL_FADE_OUT_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        let client = ClientInfo::default();
        Self {
            user_agent: client.user_agent,
            viewport_width: client.viewport.width,
            viewport_height: client.viewport.height,
            url: client.url,
        }
    }
}
