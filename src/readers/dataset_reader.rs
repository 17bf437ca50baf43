use crate::error::{DashboardError, Result};
use crate::models::{Dataset, Reading};
use crate::utils::constants::{
    CATEGORY_COLUMN, CITY_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, MISSING_VALUE_MARKERS,
};
use crate::utils::coordinates::parse_coordinate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Header positions resolved once per file.
struct ColumnIndex {
    category: usize,
    city: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let category = position(CATEGORY_COLUMN).ok_or_else(|| DashboardError::MissingColumn {
            column: CATEGORY_COLUMN.to_string(),
        })?;

        Ok(Self {
            category,
            city: position(CITY_COLUMN),
            latitude: position(LATITUDE_COLUMN),
            longitude: position(LONGITUDE_COLUMN),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStatistics {
    pub rows_read: usize,
    pub rows_retained: usize,
    pub rows_dropped: usize,
    /// Rows carrying more cells than the header; the extra cells are discarded.
    pub rows_truncated: usize,
}

pub struct DatasetReader {
    delimiter: u8,
}

impl DatasetReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load and normalize a dataset from a CSV file.
    pub fn load(&self, path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|source| DashboardError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Loading air quality data");
        let (dataset, _) = self.load_from_reader(BufReader::new(file))?;
        Ok(dataset)
    }

    /// Load and normalize a dataset from any reader, returning load counts
    /// alongside the dataset.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<(Dataset, LoadStatistics)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let columns = ColumnIndex::resolve(&headers)?;
        let mut stats = LoadStatistics::default();
        let mut readings = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            stats.rows_read += 1;

            let mut values: Vec<String> = record.iter().map(str::to_string).collect();
            if values.len() > headers.len() {
                warn!(
                    line = ?record.position().map(|p| p.line()),
                    cells = values.len(),
                    expected = headers.len(),
                    "Discarding cells beyond the header width"
                );
                stats.rows_truncated += 1;
            }
            values.resize(headers.len(), String::new());

            if let Some(reading) = self.normalize_row(&columns, values) {
                readings.push(reading);
            } else {
                stats.rows_dropped += 1;
            }
        }

        stats.rows_retained = readings.len();
        debug!(
            rows_read = stats.rows_read,
            rows_retained = stats.rows_retained,
            rows_dropped = stats.rows_dropped,
            rows_truncated = stats.rows_truncated,
            "Normalized AQI categories"
        );

        Ok((Dataset::new(headers, readings), stats))
    }

    /// Derive the estimated AQI for a row; rows with an unknown category yield `None`.
    fn normalize_row(&self, columns: &ColumnIndex, values: Vec<String>) -> Option<Reading> {
        let city = columns
            .city
            .map(|i| values[i].clone())
            .filter(|c| !MISSING_VALUE_MARKERS.contains(&c.as_str()));
        let latitude = columns
            .latitude
            .and_then(|i| parse_coordinate(&values[i]).ok());
        let longitude = columns
            .longitude
            .and_then(|i| parse_coordinate(&values[i]).ok());

        let reading = Reading::from_category(city, &values[columns.category])?;
        Some(
            reading
                .with_coordinates(latitude, longitude)
                .with_values(values),
        )
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
