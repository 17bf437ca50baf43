use std::collections::BTreeSet;

use super::reading::Reading;
use crate::utils::constants::{
    ESTIMATED_AQI_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, NON_POLLUTANT_COLUMNS,
};

/// Normalized readings sharing the header schema discovered at load time.
///
/// A dataset is immutable once built; queries borrow it through [`DatasetView`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    readings: Vec<Reading>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, readings: Vec<Reading>) -> Self {
        Self { headers, readings }
    }

    /// Source headers, trimmed.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Source headers followed by the derived estimated AQI column.
    pub fn columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(ESTIMATED_AQI_COLUMN))
            .collect()
    }

    /// Columns offered by the pollutant selector: everything after the
    /// leading identification columns, including the derived AQI.
    pub fn selectable_columns(&self) -> Vec<&str> {
        self.columns()
            .into_iter()
            .skip(NON_POLLUTANT_COLUMNS)
            .collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Both `lat` and `lng` are present in the schema.
    pub fn has_coordinates(&self) -> bool {
        self.has_column(LATITUDE_COLUMN) && self.has_column(LONGITUDE_COLUMN)
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// A view over every reading.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            dataset: self,
            rows: self.readings.iter().collect(),
        }
    }

    /// Distinct non-blank city names, case-sensitive, sorted ascending.
    pub fn distinct_cities(&self) -> Vec<String> {
        self.readings
            .iter()
            .filter_map(Reading::normalized_city)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Read-only ordered subset of a dataset's readings.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    rows: Vec<&'a Reading>,
}

impl<'a> DatasetView<'a> {
    pub fn from_rows(dataset: &'a Dataset, rows: Vec<&'a Reading>) -> Self {
        Self { dataset, rows }
    }

    pub fn empty(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            rows: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn rows(&self) -> &[&'a Reading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Reading> + '_ {
        self.rows.iter().copied()
    }

    /// Keep the rows matching `predicate`, preserving order.
    pub fn retain<F>(&self, mut predicate: F) -> DatasetView<'a>
    where
        F: FnMut(&Reading) -> bool,
    {
        DatasetView {
            dataset: self.dataset,
            rows: self.rows.iter().copied().filter(|&r| predicate(r)).collect(),
        }
    }

    pub fn aqi_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.estimated_aqi).collect()
    }
}

impl<'a, 'v> IntoIterator for &'v DatasetView<'a> {
    type Item = &'a Reading;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a Reading>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter().copied()
    }
}
