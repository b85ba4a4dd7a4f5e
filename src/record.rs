//! The output record model.
//!
//! One `Record` is one row of the export. A document with N accepted
//! line items fans out into N records sharing the same header fields;
//! a document with none still yields a single record carrying only the
//! header fields.

use serde::{Deserialize, Serialize};

/// One extracted delivery-note row.
///
/// All fields are plain strings; `quantity` is either a digit run or
/// empty when the source cell held no digits. Serialized names follow
/// the column names of the portal's original export format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the source document.
    #[serde(rename = "dosya_adi")]
    pub source_name: String,

    /// Delivery-note number from the QR payload.
    #[serde(rename = "irsaliye_no")]
    pub document_no: String,

    /// Delivery-note date from the QR payload, exported verbatim.
    #[serde(rename = "irsaliye_tarihi")]
    pub document_date: String,

    /// Ship-to address with the phone marker stripped out.
    #[serde(rename = "sevk_adresi")]
    pub ship_address: String,

    /// Ship-to addressee name.
    #[serde(rename = "sevk_edilen_kisi")]
    pub consignee: String,

    /// Ship-to phone number, digits only.
    #[serde(rename = "sevk_edilen_tel")]
    pub phone: String,

    /// Item code from the materials table.
    #[serde(rename = "malzeme_kodu")]
    pub item_code: String,

    /// Item description from the materials table.
    #[serde(rename = "malzeme_aciklama")]
    pub item_description: String,

    /// Item quantity: the first digit run of the quantity cell, or empty.
    #[serde(rename = "adeti")]
    pub quantity: String,

    /// Free-text notes applying to the whole document.
    #[serde(rename = "not_bilgileri")]
    pub notes: String,
}
