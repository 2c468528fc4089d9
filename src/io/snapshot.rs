//! Cart snapshot - writes the final cart to a CSV file
//!
//! Written once at shutdown: a header row, one row per item with a positive
//! quantity, and a `GRAND TOTAL:` trailer. Write failures propagate to the
//! caller; there is no retry.

use crate::services::CartEngine;
use anyhow::Context;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Snapshot writer for the final cart
pub struct Snapshot {
    file_path: String,
}

impl Snapshot {
    pub fn new(file_path: &str) -> Self {
        info!(file_path = %file_path, "snapshot_initialized");
        Self { file_path: file_path.to_string() }
    }

    /// Write the cart snapshot to the configured file
    pub fn write(&self, engine: &CartEngine) -> anyhow::Result<()> {
        let path = Path::new(&self.file_path);

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create snapshot directory {}", parent.display())
                })?;
            }
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create snapshot file {}", path.display()))?;
        Self::write_rows(engine, file)
            .with_context(|| format!("Failed to write snapshot file {}", path.display()))?;

        info!(
            file = %self.file_path,
            items = %engine.summary().count(),
            total = %engine.state().total_price(),
            "snapshot_written"
        );
        Ok(())
    }

    /// Write the snapshot rows to any sink (tests write into a buffer)
    pub fn write_rows<W: Write>(engine: &CartEngine, sink: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(sink);

        writer.write_record(["Category", "Total Quantity", "Total Cost"])?;
        for line in engine.summary() {
            let quantity = line.quantity.to_string();
            let cost = line.line_total.to_string();
            writer.write_record([line.name.as_str(), quantity.as_str(), cost.as_str()])?;
        }

        let state = engine.state();
        let grand_count = state.grand_count().to_string();
        let grand_total = state.total_price().to_string();
        writer.write_record(["GRAND TOTAL:", grand_count.as_str(), grand_total.as_str()])?;

        writer.flush()?;
        Ok(())
    }
}
