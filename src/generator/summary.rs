use std::fmt;

/// What a rendered schema document contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Function subsections rendered.
    pub functions: usize,
    /// Table subsections rendered.
    pub tables: usize,
    /// Column rows rendered across all tables.
    pub columns: usize,
    /// Trigger subsections rendered.
    pub triggers: usize,
    /// Column or trigger rows dropped for lacking a `table_name`.
    pub skipped_rows: usize,
    /// Distinct categories outside the known set, in first-seen order.
    pub unknown_categories: Vec<String>,
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            counted(self.functions, "function", "functions"),
            counted(self.tables, "table", "tables"),
            counted(self.triggers, "trigger", "triggers")
        )?;
        if !self.unknown_categories.is_empty() {
            write!(
                f,
                "; unknown categories: {}",
                self.unknown_categories.join(", ")
            )?;
        }
        Ok(())
    }
}
