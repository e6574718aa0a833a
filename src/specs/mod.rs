// src/specs/mod.rs
//! # Extraction "specs"
//!
//! Page-specific knowledge of *where the ground truth lives* and how to pull it
//! out. Each spec works against a [`RowSource`](crate::core::RowSource), so it
//! can be exercised offline against saved HTML or plain in-memory rows.
//!
//! Specs only extract. Reading input files, printing, and logging setup live in
//! the front end (`cli`).
//!
//! ## Current specs
//! - `clients`: `(id, name)` pairs from the client list table, filtered by a
//!   JSON list of wanted names.
pub mod clients;
