// src/core/html.rs
//! [`RowSource`] over a parsed HTML page.
//!
//! Parsing goes through `scraper` (html5ever underneath), so the tree matches
//! what a browser would build: entities are decoded, `<tbody>` is implied, and
//! stray `<tr>` outside a `<table>` is dropped.

use scraper::{ElementRef, Html, Selector};

use crate::config::ExtractOptions;
use crate::core::rows::RowSource;
use crate::error::{ExtractError, Result};

pub struct HtmlDocument {
    html: Html,
    row_sel: Selector,
    name_sel: Selector,
    id_attr: String,
    placeholder: String,
}

impl HtmlDocument {
    /// Parse a full page and compile the row/name selectors from `opts`.
    pub fn parse(doc: &str, opts: &ExtractOptions) -> Result<Self> {
        let row_sel = compile(&opts.row_selector)?;
        let name_sel = compile(&opts.name_selector)?;
        Ok(Self {
            html: Html::parse_document(doc),
            row_sel,
            name_sel,
            id_attr: opts.id_attr.clone(),
            placeholder: opts.placeholder.clone(),
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: s!(selector),
        reason: e.to_string(),
    })
}

impl RowSource for HtmlDocument {
    type Row<'a>
        = ElementRef<'a>
    where
        Self: 'a;

    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>> + '_ {
        self.html.select(&self.row_sel)
    }

    // Missing attribute reads as "" (only reachable with a custom row selector).
    fn row_id(&self, row: &Self::Row<'_>) -> String {
        s!(row.value().attr(&self.id_attr).unwrap_or_default())
    }

    // First match wins; text is every descendant text node, untouched.
    fn display_name(&self, row: &Self::Row<'_>) -> Option<String> {
        row.select(&self.name_sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
