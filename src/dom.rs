//! DOM operations adapter.
//!
//! Thin helpers over the `dom_query` crate: normalized text access and a
//! predicate-driven tree search. The source documents identify almost
//! nothing by stable attributes, so table discovery is keyed on header
//! text instead of selectors.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril, the text type `Selection::text` hands back
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Get the text content of an element, whitespace-normalized and trimmed.
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    normalize_text(&sel.text())
}

/// Collapse whitespace runs to single spaces and trim the ends.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(text.trim(), " ")
        .into_owned()
}

/// Strip markup from an HTML fragment and return its plain text.
///
/// The fragment is parsed as a document of its own, so entities are
/// decoded the same way as in tree extraction.
#[must_use]
pub fn fragment_text(fragment: &str) -> String {
    let doc = Document::from(fragment);
    normalize_text(&doc.select("body").text())
}

/// Find the first element matching `selector` that satisfies `predicate`,
/// in document order.
#[must_use]
pub fn find_first<'a, P>(doc: &'a Document, selector: &str, predicate: P) -> Option<Selection<'a>>
where
    P: Fn(&Selection) -> bool,
{
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| predicate(sel))
}

/// Locate a table by the text of its header cells.
///
/// Header cells are the table's `th` elements, or its `td` elements when
/// the table has no `th` at all. The first table whose header text
/// contains `header_text` wins.
#[must_use]
pub fn find_table_by_header<'a>(doc: &'a Document, header_text: &str) -> Option<Selection<'a>> {
    find_first(doc, "table", |table| {
        let mut cells = table.select("th");
        if !cells.exists() {
            cells = table.select("td");
        }
        cells
            .nodes()
            .iter()
            .any(|node| Selection::from(*node).text().contains(header_text))
    })
}
