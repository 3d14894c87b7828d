//! Render a database introspection export into a Markdown schema reference.
#![warn(missing_docs)]

/// Row routing: unknown-category handling and ordered grouping by category and table.
pub mod classifier;
/// Crate-wide error type.
pub mod error;
/// Markdown document generation from grouped export rows.
pub mod generator;
/// Export loading, atomic document output, and the end-to-end run.
pub mod output;
/// Schema export deserialization.
pub mod parser;

pub use error::{DocError, Result};
pub use generator::document::{generate_document, GeneratorOptions};
pub use output::pipeline::{run, RunConfig, RunOutcome};
pub use parser::export::{Category, SchemaExportRow};
