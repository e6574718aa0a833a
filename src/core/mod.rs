// src/core/mod.rs

pub mod html;
pub mod rows;

pub use html::HtmlDocument;
pub use rows::{MemoryRow, MemoryRows, RowSource};
