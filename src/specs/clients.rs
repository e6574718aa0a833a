// src/specs/clients.rs
//! Extraction spec for the client list.
//!
//! Purpose:
//! - Walk every client row (`tr[data-id]` by default) in document order.
//! - Resolve each row's name from its `.column-name` element, or the source's
//!   placeholder (`"N/A"` unless configured) when the row has none.
//! - Keep the rows whose name is *exactly* one of the requested names.
//!
//! Non-Responsibilities:
//! - **No fuzzy matching.** No trimming, case folding, or partial matches.
//! - **No dedup.** Duplicate ids or names come back as separate records.
//! - **No persistence.** [`index_by_name`] only reshapes a result in memory.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ExtractOptions;
use crate::core::{HtmlDocument, RowSource};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
}

/// name → id, as built by [`index_by_name`].
pub type ClientIndex = BTreeMap<String, String>;

/// Decode the requested names: a JSON array of strings, nothing else.
pub fn parse_requested(names_json: &str) -> Result<HashSet<String>> {
    let names: Vec<String> = serde_json::from_str(names_json)?;
    Ok(names.into_iter().collect())
}

/// Rows of `doc` whose name is one of the names in `names_json`.
///
/// Fails only when `names_json` doesn't decode; in that case no rows are read.
pub fn extract_clients<D: RowSource>(doc: &D, names_json: &str) -> Result<Vec<ClientRecord>> {
    let requested = parse_requested(names_json)?;
    Ok(extract_matching(doc, &requested))
}

/// The filter itself: one pass, document order, no early exit.
pub fn extract_matching<D: RowSource>(doc: &D, requested: &HashSet<String>) -> Vec<ClientRecord> {
    let mut out = Vec::new();
    let mut scanned = 0usize;

    for row in doc.rows() {
        scanned += 1;
        let id = doc.row_id(&row);
        let name = doc.display_name(&row).unwrap_or_else(|| s!(doc.placeholder()));

        let hit = requested.contains(&name);
        trace!(%id, %name, hit, "client row");
        if hit {
            out.push(ClientRecord { id, name });
        }
    }

    debug!(
        rows = scanned,
        requested = requested.len(),
        matched = out.len(),
        "client rows scanned"
    );
    out
}

/// Parse `html` and extract in one go.
///
/// Names are decoded before the page is touched, so bad input fails fast.
pub fn extract_from_html(
    html: &str,
    names_json: &str,
    opts: &ExtractOptions,
) -> Result<Vec<ClientRecord>> {
    let requested = parse_requested(names_json)?;
    let doc = HtmlDocument::parse(html, opts)?;
    Ok(extract_matching(&doc, &requested))
}

/// Fold records into name → id. Later records overwrite earlier ones.
pub fn index_by_name<I>(records: I) -> ClientIndex
where
    I: IntoIterator<Item = ClientRecord>,
{
    let mut index = ClientIndex::new();
    for ClientRecord { id, name } in records {
        index.insert(name, id);
    }
    index
}
