use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Dataset, DatasetError, Label};

/// Label column name used by the public credit-card fraud export.
pub const DEFAULT_LABEL_COLUMN: &str = "Class";

/// One named numeric feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Tabular dataset held column-wise in memory.
///
/// The label column is stored separately from the numeric feature columns so
/// that [`Dataset::label_at`] is a plain slice index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnarDataset {
    labels: Vec<Label>,
    columns: Vec<Column>,
}

impl ColumnarDataset {
    /// Loads a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise
    /// any error produced by [`ColumnarDataset::from_csv_reader`].
    pub fn from_csv_path(path: impl AsRef<Path>, label_column: &str) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        tracing::info!("Loading dataset from {}", path.display());
        let file = File::open(path)?;
        Self::from_csv_reader(file, label_column)
    }

    /// Parses CSV data with a header row. Every column other than
    /// `label_column` must be numeric.
    ///
    /// # Errors
    ///
    /// * [`DatasetError::MissingColumn`] if the header lacks `label_column`.
    /// * [`DatasetError::InvalidLabel`] for a label cell that is not 0 or 1.
    /// * [`DatasetError::InvalidFeature`] for a non-numeric feature cell.
    /// * [`DatasetError::Csv`] for malformed CSV.
    pub fn from_csv_reader<R: Read>(reader: R, label_column: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let label_idx = headers
            .iter()
            .position(|h| h == label_column)
            .ok_or_else(|| DatasetError::MissingColumn(label_column.to_string()))?;

        let mut columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != label_idx)
            .map(|(_, name)| Column { name: name.to_string(), values: Vec::new() })
            .collect();
        let mut labels = Vec::new();

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let mut feature = 0;
            for (i, cell) in record.iter().enumerate() {
                if i == label_idx {
                    let label = Label::parse_cell(cell).ok_or_else(|| DatasetError::InvalidLabel {
                        row,
                        value: cell.to_string(),
                    })?;
                    labels.push(label);
                    continue;
                }
                let column = &mut columns[feature];
                let value = cell.parse::<f64>().map_err(|_| DatasetError::InvalidFeature {
                    row,
                    column: column.name.clone(),
                    value: cell.to_string(),
                })?;
                column.values.push(value);
                feature += 1;
            }
        }

        tracing::info!(
            "Loaded {} rows with {} feature columns",
            labels.len(),
            columns.len()
        );
        Ok(Self { labels, columns })
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Value of feature `name` at `row`, if both exist.
    #[must_use]
    pub fn feature(&self, row: usize, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| c.values.get(row).copied())
    }
}

impl Dataset for ColumnarDataset {
    fn row_count(&self) -> usize {
        self.labels.len()
    }

    fn label_at(&self, index: usize) -> Label {
        self.labels[index]
    }
}
