//! # irsaliye-extract
//!
//! Extracts structured delivery-note (irsaliye) records from the
//! semi-structured HTML documents an e-archive invoicing portal exports,
//! and serializes the consolidated set to CSV and JSON.
//!
//! The documents are visually oriented: field zones carry no stable
//! identifiers, so tables are discovered by header text, the ship-to
//! address is recovered from raw text, and the embedded QR payload
//! supplies the authoritative document number and date. A document with
//! N materials rows fans out into N records sharing one set of header
//! fields; a document with none still yields a single header-only
//! record.
//!
//! ## Quick Start
//!
//! ```rust
//! use irsaliye_extract::{run_batch, DocumentInput};
//!
//! let html = r#"<html><body>
//! <div id="qrvalue">{"no":"IRS2025000000001","tarih":"15-01-2025"}</div>
//! </body></html>"#;
//!
//! let outcome = run_batch([DocumentInput::new("irsaliye.html", html.as_bytes())]);
//! assert_eq!(outcome.succeeded, 1);
//! assert_eq!(outcome.records[0].document_no, "IRS2025000000001");
//! ```

mod error;
mod patterns;
mod record;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding recovery for unlabeled input bytes.
pub mod encoding;

/// The field-extraction engine.
pub mod extract;

/// Sequential batch driver.
pub mod batch;

/// Container bundle expansion.
pub mod archive;

/// CSV and JSON export of the record set.
pub mod export;

// Public API - re-exports
pub use batch::{run_batch, BatchOutcome, DocumentInput};
pub use error::{Error, Result};
pub use extract::extract_records;
pub use record::Record;

/// Extract all records from one document supplied as raw bytes.
///
/// Runs encoding recovery before extraction; equivalent to
/// [`extract_records`] on already-decoded text.
///
/// # Example
///
/// ```rust
/// use irsaliye_extract::extract_records_bytes;
///
/// let html = b"<html><body><p>No tables at all.</p></body></html>";
/// let records = extract_records_bytes(html, "empty.html")?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].source_name, "empty.html");
/// # Ok::<(), irsaliye_extract::Error>(())
/// ```
pub fn extract_records_bytes(bytes: &[u8], source_name: &str) -> Result<Vec<Record>> {
    let text = match encoding::decode_utf8(bytes) {
        Some(text) => text,
        None => encoding::decode(bytes)?,
    };
    extract_records(&text, source_name)
}
