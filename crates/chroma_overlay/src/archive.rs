//! In-memory overlay archive
//!
//! Output is reproducible: every entry carries the same fixed timestamp (the
//! zip epoch, 1980-01-01 00:00) and no host-dependent metadata.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::documents::ResourceDocument;
use crate::error::{OverlayError, Result};

/// Unix mode recorded for every entry
const ENTRY_PERMISSIONS: u32 = 0o644;

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS)
}

/// Write `documents` as archive entries, in order, and return the finished
/// archive bytes.
///
/// Fails on the first entry that cannot be written (including duplicate
/// paths). Nothing is returned on failure.
pub fn package(documents: &[ResourceDocument]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = entry_options();

    for document in documents {
        let path = document.path();
        let entry_error = |source| OverlayError::ArchiveWrite {
            entry: Some(path.to_string()),
            source,
        };

        writer.start_file(path, options).map_err(entry_error)?;
        writer
            .write_all(document.content().as_bytes())
            .map_err(|err| entry_error(err.into()))?;
    }

    let bytes = writer
        .finish()
        .map_err(|source| OverlayError::ArchiveWrite {
            entry: None,
            source,
        })?
        .into_inner();

    tracing::debug!(
        entries = documents.len(),
        bytes = bytes.len(),
        "overlay archive finalized"
    );
    Ok(bytes)
}
