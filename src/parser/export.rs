use std::fmt;

use serde::Deserialize;

/// Category tag used by the introspection export to route a row to a document section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    /// `"Functions"`: stored functions with their return type and body.
    Functions,
    /// `"Table Columns"`: one column of one table.
    TableColumns,
    /// `"Triggers"`: trigger definitions attached to a table.
    Triggers,
    /// Any other caller-defined category, kept verbatim.
    Other(String),
}

impl Category {
    /// Export label for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Functions => "Functions",
            Category::TableColumns => "Table Columns",
            Category::Triggers => "Triggers",
            Category::Other(label) => label,
        }
    }

    /// Whether the category is one of the three the document has sections for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Functions" => Category::Functions,
            "Table Columns" => Category::TableColumns,
            "Triggers" => Category::Triggers,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One introspected database fact from the schema export.
///
/// The meaning of `column_name`, `data_type` and `column_description` depends on
/// the category: for functions they hold the function name, return type and SQL
/// body; for columns the column name, column type and human description; for
/// triggers the trigger name and SQL body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaExportRow {
    /// Section routing key.
    pub category: Category,
    /// Owning table, present for column and trigger rows.
    #[serde(default)]
    pub table_name: Option<String>,
    /// Function, column, or trigger name.
    #[serde(default)]
    pub column_name: Option<String>,
    /// Return type or column type.
    #[serde(default)]
    pub data_type: Option<String>,
    /// SQL body or column description.
    #[serde(default)]
    pub column_description: Option<String>,
}

impl SchemaExportRow {
    /// Create a row with only its category set.
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
            table_name: None,
            column_name: None,
            data_type: None,
            column_description: None,
        }
    }

    /// Set the owning table.
    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Set the function, column, or trigger name.
    pub fn with_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    /// Set the data or return type.
    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Set the description or SQL body.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.column_description = Some(description.into());
        self
    }
}

/// Parse a schema export. The top level must be a JSON array of row objects.
///
/// Takes raw bytes so that invalid UTF-8 surfaces as a JSON error rather than an I/O one.
pub fn parse_export(json: impl AsRef<[u8]>) -> Result<Vec<SchemaExportRow>, serde_json::Error> {
    serde_json::from_slice(json.as_ref())
}
