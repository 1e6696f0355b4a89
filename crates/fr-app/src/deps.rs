//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`App`](crate::App) construction. Not a builder: no
//! defaults, no hidden logic. The shell chooses every adapter.
//! 仅用于参数打包。

use std::sync::Arc;

use fr_core::config::JourneyTimings;
use fr_core::ports::*;
use fr_core::ClientInfo;

pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub storage: Arc<dyn StorageAdapterPort>,
    pub emergency: Arc<dyn EmergencyStoragePort>,

    // Telemetry dependencies / 遥测依赖
    pub telemetry: Arc<dyn TelemetryPort>,
    pub error_reporter: Arc<dyn ErrorReportPort>,

    // Runtime dependencies / 运行时依赖
    pub journey_events: Arc<dyn JourneyEventPort>,
    pub reload: Arc<dyn ReloadPort>,
    pub clock: Arc<dyn ClockPort>,

    // Settings / 设置
    pub client: ClientInfo,
    pub timings: JourneyTimings,
}
