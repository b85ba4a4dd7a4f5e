//! The field-extraction engine.
//!
//! One decoded document goes in; zero or more normalized records come
//! out. The source documents are visually-oriented HTML: most zones
//! carry no stable identifiers, so tables are discovered by header text
//! and the ship-to address is recovered from raw text. Records for a
//! document are accumulated provisionally, the notes rule is applied
//! across the whole set, and only the finalized list is returned.

use serde::Deserialize;

use crate::dom::{find_table_by_header, fragment_text, text_content, Document, Selection};
use crate::error::Result;
use crate::patterns::{DIGIT_RUN, PHONE, PHONE_MARKER, SHIP_ADDRESS};
use crate::record::Record;

/// Salutation row marking the position of the addressee name in the
/// customer-party table.
const CONSIGNEE_MARKER: &str = "SAYIN";

/// Header text identifying the materials table.
const MATERIALS_HEADER: &str = "Malzeme Kodu";

/// Header text identifying the notes table.
const NOTES_HEADER: &str = "Açıklamalar";

/// Label of qualifying note rows inside the notes table.
const NOTE_LABEL: &str = "Not:";

/// JSON payload embedded in the QR-code holder element.
///
/// Carries the authoritative document number and date; other keys are
/// ignored.
#[derive(Debug, Default, Deserialize)]
struct QrPayload {
    #[serde(default)]
    no: String,
    #[serde(default)]
    tarih: String,
}

/// Extract all records from one decoded document.
///
/// Malformed input yields a best-effort partial record set rather than
/// an error; a document that yields no line items still produces one
/// record carrying the header fields. The `Result` shape is the
/// per-document failure channel consumed by the batch driver.
#[allow(clippy::unnecessary_wraps)]
pub fn extract_records(html: &str, source_name: &str) -> Result<Vec<Record>> {
    let doc = Document::from(html);

    let mut header = Record {
        source_name: source_name.to_string(),
        ..Record::default()
    };

    if let Some(payload) = qr_payload(&doc) {
        header.document_no = payload.no;
        header.document_date = payload.tarih;
    }

    if let Some(name) = consignee_name(&doc) {
        header.consignee = name;
    }

    if let Some((address, phone)) = ship_address(html) {
        header.ship_address = address;
        header.phone = phone;
    }

    let mut records = line_items(&doc, &header);

    if let Some(notes) = notes_text(&doc) {
        for record in &mut records {
            record.notes = notes.clone();
        }
        header.notes = notes;
    }

    // A document with no accepted line items still yields its header row.
    if records.is_empty() {
        records.push(header);
    }

    Ok(records)
}

/// Decode the QR payload, if the holder element exists and parses.
fn qr_payload(doc: &Document) -> Option<QrPayload> {
    let holder = doc.select("#qrvalue");
    if !holder.exists() {
        return None;
    }
    let text = holder.text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(payload) => Some(payload),
        Err(err) => {
            // Number and date stay empty; the rest of the document is
            // still extracted.
            log::warn!("unparseable QR payload: {err}");
            None
        }
    }
}

/// Scan the customer-party table for the addressee name.
///
/// The row containing the SAYIN salutation arms the scan; the next row
/// whose first cell has non-trivial text supplies the name.
fn consignee_name(doc: &Document) -> Option<String> {
    let table = doc.select("#customerPartyTable");
    if !table.exists() {
        return None;
    }
    let mut after_marker = false;
    for row in table.select("tr").nodes() {
        let row = Selection::from(*row);
        let cells = row.select("td");
        let Some(first) = cells.nodes().first() else {
            continue;
        };
        let text = text_content(&Selection::from(*first));
        if text.contains(CONSIGNEE_MARKER) {
            after_marker = true;
            continue;
        }
        if after_marker && text.chars().count() > 2 {
            return Some(text);
        }
    }
    None
}

/// Recover the ship-to address block and embedded phone number from raw
/// document text.
///
/// The address sits between a "Sevk Adresi:" label and the closing tag
/// of its holder as loose inline markup; the captured span is reduced to
/// plain text before the phone marker is split off.
fn ship_address(html: &str) -> Option<(String, String)> {
    let captured = SHIP_ADDRESS.captures(html)?.get(1)?.as_str();
    let plain = fragment_text(captured);
    match PHONE.captures(&plain).and_then(|c| c.get(1)) {
        Some(digits) => {
            let phone = digits.as_str().to_string();
            let address = PHONE_MARKER.replace_all(&plain, "").trim().to_string();
            Some((address, phone))
        }
        None => Some((plain, String::new())),
    }
}

/// Fan the materials table out into one record per accepted line item.
///
/// The first row is the column header. Data rows need at least three
/// cells: code in the 2nd, description in the 3rd, quantity in the 4th
/// when present. Rows without an item code are discarded.
fn line_items(doc: &Document, header: &Record) -> Vec<Record> {
    let mut records = Vec::new();
    let Some(table) = find_table_by_header(doc, MATERIALS_HEADER) else {
        return records;
    };
    for row in table.select("tr").nodes().iter().skip(1) {
        let row = Selection::from(*row);
        let cells: Vec<Selection> = row
            .select("td")
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .collect();
        if cells.len() < 3 {
            continue;
        }
        let item_code = text_content(&cells[1]);
        if item_code.is_empty() {
            continue;
        }
        let mut record = header.clone();
        record.item_code = item_code;
        record.item_description = text_content(&cells[2]);
        record.quantity = cells
            .get(3)
            .map(|cell| first_digit_run(&text_content(cell)))
            .unwrap_or_default();
        records.push(record);
    }
    records
}

/// Locate the document-wide notes value in the notes table.
///
/// Qualifying rows carry a "Not:" label cell and a non-empty value cell;
/// the last qualifying row wins.
fn notes_text(doc: &Document) -> Option<String> {
    let table = find_table_by_header(doc, NOTES_HEADER)?;
    let mut notes = None;
    for row in table.select("tr").nodes().iter().skip(1) {
        let row = Selection::from(*row);
        let cells = row.select("td");
        let nodes = cells.nodes();
        let (Some(label), Some(value)) = (nodes.first(), nodes.get(1)) else {
            continue;
        };
        let label = text_content(&Selection::from(*label));
        let value = text_content(&Selection::from(*value));
        if label.contains(NOTE_LABEL) && !value.is_empty() {
            notes = Some(value);
        }
    }
    notes
}

/// First maximal digit run in a cell's text, or empty when none.
fn first_digit_run(text: &str) -> String {
    DIGIT_RUN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
