//! Driving port for the CSV bulk-import pipeline.

use async_trait::async_trait;

use crate::domain::{Error, ImportKind, ImportReport};

/// Run one import batch over complete, already-read file text.
///
/// The pipeline never fails on bad data; schema and row problems are
/// aggregated into the returned [`ImportReport`]. An `Err` here means the
/// underlying store itself failed.
#[async_trait]
pub trait ImportCommand: Send + Sync {
    /// Validate and apply one batch of delimited text for the given kind.
    async fn import(&self, kind: ImportKind, text: &str) -> Result<ImportReport, Error>;
}
