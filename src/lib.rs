// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::config::ExtractOptions;
pub use crate::core::{HtmlDocument, MemoryRows, RowSource};
pub use crate::error::{ExtractError, Result};
pub use crate::specs::clients::{
    ClientIndex, ClientRecord, extract_clients, extract_from_html, extract_matching,
    index_by_name, parse_requested,
};
