mod init;
mod metrics;

pub use init::{TelemetryGuard, init_telemetry};
pub use metrics::{
    ANALYZE_BATCH_SIZE, ANALYZE_REQUESTS_TOTAL, HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL,
    TEXTS_ANALYZED_TOTAL,
};
