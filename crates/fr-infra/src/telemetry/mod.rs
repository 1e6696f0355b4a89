//! HTTP telemetry and error report senders.

mod http;
mod reporter;
mod sender;

pub use http::JsonPoster;
pub use reporter::HttpErrorReporter;
pub use sender::HttpTelemetrySender;
