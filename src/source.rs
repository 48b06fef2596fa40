//! Column catalog: the slice of the data source the wizard needs.
//!
//! The wizard never touches the data itself; it only needs an ordered,
//! de-duplicated list of column names (to populate axis/group/sort option
//! sets) and per-column numeric-ness (for finish validation). A catalog can
//! be built from a polars schema, from a CSV file's inferred schema, or from
//! plain name/flag pairs in tests.

use std::path::Path;

use color_eyre::Result;
use polars::prelude::{CsvReadOptions, DataType, Schema, SerReader};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnInfo {
    name: String,
    numeric: bool,
}

/// Ordered, de-duplicated column metadata for one data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCatalog {
    columns: Vec<ColumnInfo>,
}

impl ColumnCatalog {
    /// Build from `(name, is_numeric)` pairs, keeping the first occurrence
    /// of each name.
    pub fn new(columns: impl IntoIterator<Item = (String, bool)>) -> Self {
        let mut out = Self::default();
        for (name, numeric) in columns {
            if !out.contains(&name) {
                out.columns.push(ColumnInfo { name, numeric });
            }
        }
        out
    }

    /// Build from a polars schema; column order is the schema order.
    pub fn from_schema(schema: &Schema) -> Self {
        Self::new(
            schema
                .iter()
                .map(|(name, dtype)| (name.to_string(), is_numeric_type(dtype))),
        )
    }

    /// Infer a catalog from the head of a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut read_options = CsvReadOptions::default();
        read_options.n_rows = Some(SCHEMA_SAMPLE_ROWS);
        read_options.infer_schema_length = Some(SCHEMA_SAMPLE_ROWS);
        let df = read_options
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;
        Ok(Self::new(df.get_columns().iter().map(|column| {
            (column.name().to_string(), is_numeric_type(column.dtype()))
        })))
    }

    /// Column names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// Whether the named column holds numeric data. Unknown names are not
    /// numeric.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.columns
            .iter()
            .any(|column| column.name == name && column.numeric)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Rows sampled when inferring a CSV schema.
const SCHEMA_SAMPLE_ROWS: usize = 100;

fn is_numeric_type(dtype: &DataType) -> bool {
    dtype.is_numeric()
}
