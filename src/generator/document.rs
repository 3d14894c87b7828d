use tracing::debug;

use crate::classifier::grouping::{self, CategoryGroups};
use crate::classifier::unknown_category::UnknownCategoryPolicy;
use crate::error::Result;
use crate::generator::markdown::{escape_table_cell, fenced_block, inline_code};
use crate::generator::summary::Summary;
use crate::parser::export::{Category, SchemaExportRow};

/// Document title.
pub const TITLE: &str = "# Database Schema Documentation";

/// Static paragraph under the Overview heading.
pub const OVERVIEW: &str = "This document describes the application's database schema: \
stored functions, table columns and triggers. It is generated from the schema export; \
regenerate it instead of editing it by hand.";

/// Cell text used when a column has no description.
pub const NO_DESCRIPTION: &str = "No description";

const UNNAMED: &str = "(unnamed)";
const UNKNOWN_TYPE: &str = "unknown";

/// Options controlling document generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// How rows with an unrecognised category are handled.
    pub unknown_categories: UnknownCategoryPolicy,
}

/// A rendered document together with counts of what went into it.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// Markdown text, ending with a single newline.
    pub markdown: String,
    /// Section counts.
    pub summary: Summary,
}

/// Render the schema document for `rows`.
pub fn generate_document(rows: &[SchemaExportRow], options: &GeneratorOptions) -> Result<String> {
    generate(rows, options).map(|doc| doc.markdown)
}

/// Render the schema document for `rows` and report what it contains.
///
/// Sections always appear in the order Overview, Functions, Tables, Triggers.
/// A category with no rows produces no section at all.
pub fn generate(
    rows: &[SchemaExportRow],
    options: &GeneratorOptions,
) -> Result<GeneratedDocument> {
    let groups = grouping::group_by_category(rows, options.unknown_categories)?;
    let mut summary = Summary {
        unknown_categories: groups.unknown_categories.clone(),
        ..Summary::default()
    };

    let mut blocks = vec![
        TITLE.to_string(),
        "## Overview".to_string(),
        OVERVIEW.to_string(),
    ];
    render_functions(&groups, &mut blocks, &mut summary);
    render_tables(&groups, &mut blocks, &mut summary);
    render_triggers(&groups, &mut blocks, &mut summary);

    debug!(
        functions = summary.functions,
        tables = summary.tables,
        columns = summary.columns,
        triggers = summary.triggers,
        "rendered schema document"
    );

    let mut markdown = blocks.join("\n\n");
    markdown.push('\n');
    Ok(GeneratedDocument { markdown, summary })
}

fn render_functions(
    groups: &CategoryGroups<'_>,
    blocks: &mut Vec<String>,
    summary: &mut Summary,
) {
    let Some(functions) = groups.get(&Category::Functions) else {
        return;
    };

    blocks.push("## Functions".to_string());
    for row in functions {
        blocks.push(format!("### {}", display_name(row)));
        blocks.push(format!(
            "**Returns:** {}",
            inline_code(display_type(row))
        ));
        if let Some(body) = row.column_description.as_deref() {
            blocks.push(fenced_block("sql", body));
        }
        summary.functions += 1;
    }
}

fn render_tables(
    groups: &CategoryGroups<'_>,
    blocks: &mut Vec<String>,
    summary: &mut Summary,
) {
    let columns = groups.get(&Category::TableColumns).unwrap_or_default();
    let by_table = grouping::group_by_table(columns);
    summary.skipped_rows += by_table.skipped;
    if by_table.tables.is_empty() {
        return;
    }

    blocks.push("## Tables".to_string());
    for (table, rows) in &by_table.tables {
        blocks.push(format!("### {table}"));

        let mut lines = vec![
            "| Column | Type | Description |".to_string(),
            "|--------|------|-------------|".to_string(),
        ];
        for row in rows {
            let description = row
                .column_description
                .as_deref()
                .map(escape_table_cell)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            lines.push(format!(
                "| {} | {} | {} |",
                escape_table_cell(display_name(row)),
                escape_table_cell(display_type(row)),
                description
            ));
        }
        blocks.push(lines.join("\n"));

        summary.tables += 1;
        summary.columns += rows.len();
    }
}

fn render_triggers(
    groups: &CategoryGroups<'_>,
    blocks: &mut Vec<String>,
    summary: &mut Summary,
) {
    let Some(triggers) = groups.get(&Category::Triggers) else {
        return;
    };
    let by_table = grouping::group_by_table(triggers);
    summary.skipped_rows += by_table.skipped;
    if by_table.tables.is_empty() {
        return;
    }

    blocks.push("## Triggers".to_string());
    for (table, rows) in &by_table.tables {
        blocks.push(format!("### {table}"));
        for row in rows {
            blocks.push(format!("#### {}", display_name(row)));
            if let Some(body) = row.column_description.as_deref() {
                blocks.push(fenced_block("sql", body));
            }
            summary.triggers += 1;
        }
    }
}

fn display_name(row: &SchemaExportRow) -> &str {
    non_blank(row.column_name.as_deref()).unwrap_or(UNNAMED)
}

fn display_type(row: &SchemaExportRow) -> &str {
    non_blank(row.data_type.as_deref()).unwrap_or(UNKNOWN_TYPE)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
