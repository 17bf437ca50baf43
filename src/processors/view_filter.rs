use crate::models::{Dataset, DatasetView};
use crate::utils::constants::DEFAULT_FILTER_THRESHOLD;

/// Rows above `threshold`, restricted to `city` when one is given.
///
/// An empty city string counts as no city. The comparison is strict, so a
/// reading equal to the threshold is excluded.
pub fn filter<'a>(view: &DatasetView<'a>, city: Option<&str>, threshold: f64) -> DatasetView<'a> {
    match city.filter(|c| !c.is_empty()) {
        Some(city) => filter_by_city_and_threshold(view, city, threshold),
        None => view.retain(|r| r.estimated_aqi > threshold),
    }
}

/// Rows for exactly `city` whose estimated AQI is above `threshold`.
pub fn filter_by_city_and_threshold<'a>(
    view: &DatasetView<'a>,
    city: &str,
    threshold: f64,
) -> DatasetView<'a> {
    view.retain(|r| r.city_is(city) && r.estimated_aqi > threshold)
}

/// Rows whose category label matches exactly.
pub fn filter_by_category<'a>(view: &DatasetView<'a>, category: &str) -> DatasetView<'a> {
    view.retain(|r| r.category == category)
}

/// The fixed multi-condition display: first city in the sorted city list
/// with the default threshold. Empty when the dataset has no named city.
pub fn default_city_filter(dataset: &Dataset) -> DatasetView<'_> {
    match dataset.distinct_cities().first() {
        Some(city) => {
            filter_by_city_and_threshold(&dataset.view(), city, DEFAULT_FILTER_THRESHOLD)
        }
        None => DatasetView::empty(dataset),
    }
}
