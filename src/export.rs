//! Export of the extracted record set.
//!
//! Two serializations of the same rows: CSV with a fixed column order,
//! and JSON as a sequence of key-value objects. Both are UTF-8 with
//! non-ASCII characters preserved literally.

use std::io::Write;

use crate::error::Result;
use crate::record::Record;

/// Write the record set as CSV.
///
/// The header row and column order come from the record's serialized
/// field names: source name, document number, document date, address,
/// addressee, phone, item code, item description, quantity, notes.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the record set as pretty-printed JSON (2-space indent).
pub fn write_json<W: Write>(records: &[Record], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
