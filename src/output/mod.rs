/// Reads the export and writes the rendered document to disk.
pub mod formatter;
/// End-to-end run: load, render, then write or check.
pub mod pipeline;
