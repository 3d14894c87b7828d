use std::fmt;

/// What to do with rows whose category is not `Functions`, `Table Columns` or `Triggers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCategoryPolicy {
    /// Treat them as table-column rows (the export's historical behaviour).
    #[default]
    Columns,
    /// Drop them from the document.
    Ignore,
    /// Abort the run.
    Error,
}

impl fmt::Display for UnknownCategoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownCategoryPolicy::Columns => write!(f, "columns"),
            UnknownCategoryPolicy::Ignore => write!(f, "ignore"),
            UnknownCategoryPolicy::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for UnknownCategoryPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "columns" => Ok(UnknownCategoryPolicy::Columns),
            "ignore" => Ok(UnknownCategoryPolicy::Ignore),
            "error" => Ok(UnknownCategoryPolicy::Error),
            _ => Err(format!(
                "Invalid unknown-category policy: {s} (expected columns, ignore or error)"
            )),
        }
    }
}
