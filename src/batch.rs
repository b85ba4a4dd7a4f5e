//! Sequential batch driver.
//!
//! Feeds each (name, bytes) item through the decoder and the extractor,
//! accumulating records and per-item outcome counts. Documents are
//! processed strictly one after another; output order follows input
//! order, with a document's rows in table order.

use log::warn;

use crate::encoding;
use crate::extract::extract_records;
use crate::record::Record;

/// One input document: raw bytes plus the display name used as the
/// records' source identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInput {
    /// Display name (file name or archive entry name).
    pub name: String,
    /// Raw, undecoded file content.
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    /// Convenience constructor.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Accumulated result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// All extracted records, grouped by document in arrival order.
    pub records: Vec<Record>,
    /// Number of items fed into the driver.
    pub attempted: usize,
    /// Number of items that decoded and extracted without a
    /// document-level error.
    pub succeeded: usize,
}

/// Run the decode-and-extract pipeline over a sequence of documents.
///
/// Each item is first decoded as plain UTF-8 (the assumed default for
/// individually supplied files) and only put through the full encoding
/// trial when that fails. Per-item failures are logged and counted,
/// never propagated; an item that yields no line items still succeeds
/// with its fallback record.
#[must_use]
pub fn run_batch<I>(items: I) -> BatchOutcome
where
    I: IntoIterator<Item = DocumentInput>,
{
    let mut outcome = BatchOutcome::default();
    for item in items {
        outcome.attempted += 1;
        let decoded = match encoding::decode_utf8(&item.bytes) {
            Some(text) => Ok(text),
            None => encoding::decode(&item.bytes),
        };
        let text = match decoded {
            Ok(text) => text,
            Err(err) => {
                warn!("{}: {err}", item.name);
                continue;
            }
        };
        match extract_records(&text, &item.name) {
            Ok(records) => {
                outcome.records.extend(records);
                outcome.succeeded += 1;
            }
            Err(err) => warn!("{}: {err}", item.name),
        }
    }
    outcome
}
