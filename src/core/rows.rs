// src/core/rows.rs
//! Row access, abstracted away from any particular document.
//!
//! The extractor only ever needs two questions answered about a document:
//! *which elements are client rows* (in document order), and for a given row
//! *what is its id* and *what does its name element say, if it has one*,
//! plus the name to report when it doesn't.
//! [`RowSource`] is that contract. [`HtmlDocument`](super::HtmlDocument)
//! answers it from parsed HTML; [`MemoryRows`] answers it from plain data.

use crate::config::consts::MISSING_NAME;

/// A document that can enumerate client rows.
pub trait RowSource {
    /// Handle to one row, borrowed from the source.
    type Row<'a>
    where
        Self: 'a;

    /// Every row carrying an id attribute, in document order.
    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>> + '_;

    /// The row's id attribute, verbatim.
    fn row_id(&self, row: &Self::Row<'_>) -> String;

    /// Text of the row's name element, or `None` when the row has none.
    fn display_name(&self, row: &Self::Row<'_>) -> Option<String>;

    /// Name reported for rows without a name element.
    fn placeholder(&self) -> &str {
        MISSING_NAME
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRow {
    pub id: String,
    pub name: Option<String>,
}

/// Rows already pulled out of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRows {
    rows: Vec<MemoryRow>,
}

impl MemoryRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: &str, name: Option<&str>) {
        self.rows.push(MemoryRow { id: s!(id), name: name.map(String::from) });
    }

}

impl<'s> FromIterator<(&'s str, Option<&'s str>)> for MemoryRows {
    fn from_iter<I: IntoIterator<Item = (&'s str, Option<&'s str>)>>(iter: I) -> Self {
        let mut out = MemoryRows::new();
        for (id, name) in iter {
            out.push(id, name);
        }
        out
    }
}

impl RowSource for MemoryRows {
    type Row<'a> = &'a MemoryRow
    where
        Self: 'a;

    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>> + '_ {
        self.rows.iter()
    }

    fn row_id(&self, row: &Self::Row<'_>) -> String {
        row.id.clone()
    }

    fn display_name(&self, row: &Self::Row<'_>) -> Option<String> {
        row.name.clone()
    }
}
