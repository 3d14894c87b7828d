use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;
use crate::generator::document::{self, GeneratorOptions};
use crate::generator::summary::Summary;
use crate::output::formatter;

/// Export read when no input path is given.
pub const DEFAULT_INPUT: &str = "schema_export.json";
/// Document written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "DATABASE_SCHEMA.md";

/// Settings for one documentation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Schema export to read.
    pub input: PathBuf,
    /// Markdown document to write (or compare against in check mode).
    pub output: PathBuf,
    /// Rendering options.
    pub options: GeneratorOptions,
    /// Compare with the existing document instead of writing it.
    pub check: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            options: GeneratorOptions::default(),
            check: false,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The document was (re)written.
    Written(Summary),
    /// Check mode: the existing document matches the export.
    UpToDate(Summary),
    /// Check mode: the existing document is missing or differs from the export.
    Stale(Summary),
}

impl RunOutcome {
    /// Counts of the rendered document.
    pub fn summary(&self) -> &Summary {
        match self {
            RunOutcome::Written(s) | RunOutcome::UpToDate(s) | RunOutcome::Stale(s) => s,
        }
    }
}

/// Load the export, render the document, then write it or check it.
///
/// Reading and parsing complete before the destination is touched, so a bad
/// export never clobbers an existing document.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let rows = formatter::load_export(&config.input)?;
    let generated = document::generate(&rows, &config.options)?;
    let summary = generated.summary;

    if config.check {
        let fresh = formatter::is_up_to_date(&config.output, &generated.markdown)?;
        debug!(path = %config.output.display(), fresh, "checked schema document");
        return Ok(if fresh {
            RunOutcome::UpToDate(summary)
        } else {
            RunOutcome::Stale(summary)
        });
    }

    formatter::write_document(&config.output, &generated.markdown)?;
    info!(
        path = %config.output.display(),
        functions = summary.functions,
        tables = summary.tables,
        columns = summary.columns,
        triggers = summary.triggers,
        skipped = summary.skipped_rows,
        "schema documentation generated"
    );
    Ok(RunOutcome::Written(summary))
}
