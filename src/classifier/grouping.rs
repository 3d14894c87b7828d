use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::classifier::unknown_category::UnknownCategoryPolicy;
use crate::error::{DocError, Result};
use crate::parser::export::{Category, SchemaExportRow};

/// Rows partitioned by category, in first-seen key order with input order kept per group.
///
/// Rows with an unknown category are already resolved according to the
/// [`UnknownCategoryPolicy`], so only the three known categories appear as keys.
#[derive(Debug, Default)]
pub struct CategoryGroups<'a> {
    groups: IndexMap<Category, Vec<&'a SchemaExportRow>>,
    /// Distinct unknown categories seen in the input, in first-seen order.
    pub unknown_categories: Vec<String>,
}

impl<'a> CategoryGroups<'a> {
    /// Rows of a category, or `None` when the export had no such rows.
    pub fn get(&self, category: &Category) -> Option<&[&'a SchemaExportRow]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Categories present, in first-seen order.
    pub fn categories(&self) -> indexmap::map::Keys<'_, Category, Vec<&'a SchemaExportRow>> {
        self.groups.keys()
    }
}

/// Partition rows by category in a single pass.
pub fn group_by_category(
    rows: &[SchemaExportRow],
    policy: UnknownCategoryPolicy,
) -> Result<CategoryGroups<'_>> {
    let mut groups: IndexMap<Category, Vec<&SchemaExportRow>> = IndexMap::new();
    let mut unknown: IndexSet<&str> = IndexSet::new();

    for (index, row) in rows.iter().enumerate() {
        let key = match &row.category {
            Category::Other(label) => {
                let first_sighting = unknown.insert(label.as_str());
                match policy {
                    UnknownCategoryPolicy::Columns => {
                        if first_sighting {
                            warn!(category = %label, "treating unknown category as table columns");
                        }
                        Category::TableColumns
                    }
                    UnknownCategoryPolicy::Ignore => {
                        if first_sighting {
                            debug!(category = %label, "ignoring unknown category");
                        }
                        continue;
                    }
                    UnknownCategoryPolicy::Error => {
                        return Err(DocError::UnknownCategory {
                            category: label.clone(),
                            index,
                        });
                    }
                }
            }
            known => known.clone(),
        };
        groups.entry(key).or_default().push(row);
    }

    Ok(CategoryGroups {
        groups,
        unknown_categories: unknown.into_iter().map(str::to_string).collect(),
    })
}

/// Rows of one category keyed by owning table.
#[derive(Debug, Default)]
pub struct TableGroups<'a> {
    /// Table name to its rows, tables in first-seen order, rows in input order.
    pub tables: IndexMap<&'a str, Vec<&'a SchemaExportRow>>,
    /// Rows dropped because they carry no `table_name`.
    pub skipped: usize,
}

/// Group rows by `table_name` in a single pass. Rows without a table are counted, not kept.
pub fn group_by_table<'a>(rows: &[&'a SchemaExportRow]) -> TableGroups<'a> {
    let mut grouped = TableGroups::default();
    for &row in rows {
        match row.table_name.as_deref() {
            Some(table) => grouped.tables.entry(table).or_default().push(row),
            None => {
                warn!(
                    category = %row.category,
                    name = row.column_name.as_deref().unwrap_or_default(),
                    "skipping row without table_name"
                );
                grouped.skipped += 1;
            }
        }
    }
    grouped
}
