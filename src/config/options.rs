// src/config/options.rs
use super::consts::*;

/// Where the client table lives in the document and how a row is read.
///
/// The defaults describe the client list page: rows are `<tr data-id="…">`
/// and the name sits in a `.column-name` cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// CSS selector matching every client row.
    pub row_selector: String,
    /// Attribute on the row holding its identifier.
    pub id_attr: String,
    /// CSS selector for the name element, scoped to one row.
    pub name_selector: String,
    /// Name used when a row has no name element.
    pub placeholder: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            row_selector: s!(ROW_SELECTOR),
            id_attr: s!(ROW_ID_ATTR),
            name_selector: s!(NAME_SELECTOR),
            placeholder: s!(MISSING_NAME),
        }
    }
}

impl ExtractOptions {
    /// Point the extractor at a different id attribute.
    ///
    /// Rows are selected by the presence of that attribute, so the row
    /// selector follows unless it was already customised.
    pub fn set_id_attr(&mut self, attr: &str) {
        let attr = attr.trim();
        if self.row_selector == ROW_SELECTOR {
            self.row_selector = format!("tr[{attr}]");
        }
        self.id_attr = s!(attr);
    }
}
