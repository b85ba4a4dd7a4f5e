//! Container bundle expansion.
//!
//! A ZIP bundle's document entries become individual batch items, keyed
//! by their internal entry names. Expansion is all-or-nothing: an
//! unreadable bundle is a batch-wide failure with no partial results.

use std::io::{Cursor, Read};
use std::path::Path;

use log::debug;
use zip::ZipArchive;

use crate::batch::DocumentInput;
use crate::error::Result;

/// Check whether a name carries the document suffix (`.html`,
/// ASCII case-insensitive).
#[must_use]
pub fn is_document_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Expand a ZIP bundle into individual document items.
///
/// Directory entries and entries without the document suffix are
/// skipped; each kept entry's internal name becomes the item's display
/// name, in archive order.
pub fn expand_zip(bytes: &[u8]) -> Result<Vec<DocumentInput>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut items = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !is_document_name(&name) {
            debug!("skipping bundle entry {name}");
            continue;
        }
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        items.push(DocumentInput {
            name,
            bytes: contents,
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_test_zip() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer
            .start_file("irsaliye1.html", options)
            .expect("start irsaliye1.html");
        writer
            .write_all(b"<html><body>one</body></html>")
            .expect("write irsaliye1.html");

        writer
            .start_file("notes.txt", options)
            .expect("start notes.txt");
        writer.write_all(b"ignored").expect("write notes.txt");

        writer
            .add_directory("nested/", options)
            .expect("add directory");

        writer
            .start_file("nested/irsaliye2.HTML", options)
            .expect("start nested entry");
        writer
            .write_all(b"<html><body>two</body></html>")
            .expect("write nested entry");

        writer.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn expands_only_document_entries() {
        let bytes = build_test_zip();
        let items = expand_zip(&bytes).expect("expand failed");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "irsaliye1.html");
        assert_eq!(items[0].bytes, b"<html><body>one</body></html>");
        assert_eq!(items[1].name, "nested/irsaliye2.HTML");
    }

    #[test]
    fn invalid_bytes_are_a_bundle_failure() {
        assert!(expand_zip(b"not a zip archive").is_err());
    }

    #[test]
    fn document_suffix_is_case_insensitive() {
        assert!(is_document_name("a.html"));
        assert!(is_document_name("dir/b.HTML"));
        assert!(!is_document_name("c.htm"));
        assert!(!is_document_name("d.zip"));
        assert!(!is_document_name("html"));
    }
}
