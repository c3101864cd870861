//! Subscriber setup.

use super::file_writer::Rotation;
use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "timewheel";

/// File the spans are exported to, inside the data directory.
pub const TRACE_FILE: &str = "timewheel-otlp.json";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// feeding an OpenTelemetry layer that exports to [`TRACE_FILE`].
///
/// Tracing is best effort. If the data directory cannot be created nothing is
/// installed, and a second call leaves the first subscriber in place.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let rotation = Rotation {
        max_bytes: config.trace_max_bytes,
        backups: config.trace_backups,
    };
    let provider =
        tracer::file_tracer_provider(data_dir.join(TRACE_FILE), rotation, resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.trace_level))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
