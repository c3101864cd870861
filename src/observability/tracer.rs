//! OpenTelemetry tracer provider exporting to a rotating local file.

use super::file_writer::{Rotation, RotatingFile};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one OTLP/JSON line.
struct FileSpanExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    closed: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.closed {
            Err(TraceError::from("trace file exporter already shut down"))
        } else {
            let line = self.formatter.format_batch(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.closed = true;
    }

    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

/// Builds a provider whose spans are exported synchronously to `path`.
pub fn file_tracer_provider(
    path: PathBuf,
    rotation: Rotation,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path, rotation),
        formatter: SpanFormatter::new(resource.clone(), scope),
        closed: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
