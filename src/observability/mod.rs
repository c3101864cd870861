//! Tracing with OpenTelemetry spans exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → timewheel-otlp.json
//! ```
//!
//! Each exported batch becomes one OTLP/JSON line. The file rotates once it
//! reaches `trace_max_bytes`, keeping `trace_backups` numbered backups. The
//! filter comes from `trace_level` (default `info`) and accepts any
//! `EnvFilter` directive, e.g. `timewheel=debug`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::Rotation;
pub use init::{init_tracing, TRACE_FILE};
