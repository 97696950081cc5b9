//! Error types emitted by the Relay CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use relay_core::BookingSetError;
use thiserror::Error;

/// Errors emitted by the Relay CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the bookings file failed.
    #[error("failed to open bookings at {path:?}: {source}")]
    OpenBookings {
        /// Bookings file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Bookings JSON could not be decoded.
    #[error("failed to parse bookings JSON at {path:?}: {source}")]
    ParseBookings {
        /// Bookings file.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded bookings cannot be solved as a set.
    #[error("bookings in {path:?} are invalid: {source}")]
    InvalidBookings {
        /// Bookings file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: BookingSetError,
    },
    /// Serialising the winning order failed.
    #[error("failed to serialise solution: {0}")]
    SerialiseSolution(#[source] serde_json::Error),
    /// Creating the output file (or its parent directories) failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the output file failed.
    #[error("failed to write output file {path:?}: {source}")]
    WriteOutput {
        /// Output file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
