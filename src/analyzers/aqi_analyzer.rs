use crate::models::DatasetView;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiSummary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
}

impl AqiSummary {
    pub fn summary(&self) -> String {
        format!(
            "Readings: {}\n\
            Average Estimated AQI: {:.2}\n\
            Max Estimated AQI: {}",
            self.count, self.mean, self.max
        )
    }
}

/// Pie-chart slice: how many readings fall in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

pub struct AqiAnalyzer;

impl AqiAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Mean and maximum estimated AQI. `None` for an empty view.
    pub fn summary(&self, view: &DatasetView<'_>) -> Option<AqiSummary> {
        if view.is_empty() {
            return None;
        }

        let mut sum = 0.0f64;
        let mut max = f64::NEG_INFINITY;
        for reading in view {
            sum += reading.estimated_aqi;
            max = max.max(reading.estimated_aqi);
        }

        Some(AqiSummary {
            count: view.len(),
            mean: sum / view.len() as f64,
            max,
        })
    }

    /// Mean estimated AQI per raw city value, keys sorted.
    ///
    /// Grouping uses the city cell as loaded, so blank-but-present values
    /// form their own group; readings without a city value are skipped.
    pub fn group_mean_by_city(&self, view: &DatasetView<'_>) -> BTreeMap<String, f64> {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

        for reading in view {
            if let Some(city) = reading.city.as_deref() {
                let entry = groups.entry(city).or_insert((0.0, 0));
                entry.0 += reading.estimated_aqi;
                entry.1 += 1;
            }
        }

        groups
            .into_iter()
            .map(|(city, (sum, count))| (city.to_string(), sum / count as f64))
            .collect()
    }

    /// Readings per category, most frequent first; ties keep first-seen order.
    pub fn category_counts(&self, view: &DatasetView<'_>) -> Vec<CategoryShare> {
        let mut order: Vec<(&str, usize)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for reading in view {
            let category = reading.category.as_str();
            match positions.get(category) {
                Some(&i) => order[i].1 += 1,
                None => {
                    positions.insert(category, order.len());
                    order.push((category, 1));
                }
            }
        }

        order.sort_by(|a, b| b.1.cmp(&a.1));

        let total = view.len() as f64;
        order
            .into_iter()
            .map(|(category, count)| CategoryShare {
                category: category.to_string(),
                count,
                percent: count as f64 / total * 100.0,
            })
            .collect()
    }
}

impl Default for AqiAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, Reading};
    use pretty_assertions::assert_eq;

    fn dataset(rows: &[(Option<&str>, &str, f64)]) -> Dataset {
        Dataset::new(
            Vec::new(),
            rows.iter()
                .map(|(city, category, aqi)| {
                    Reading::new(city.map(str::to_string), category.to_string(), *aqi)
                })
                .collect(),
        )
    }

    #[test]
    fn test_summary() {
        let ds = dataset(&[
            (Some("A"), "Good", 25.0),
            (Some("B"), "Moderate", 75.0),
            (Some("C"), "Unhealthy", 175.0),
        ]);

        let summary = AqiAnalyzer::new().summary(&ds.view()).unwrap();
        assert!((summary.mean - 91.666_666).abs() < 0.0001);
        assert_eq!(summary.max, 175.0);
        assert_eq!(summary.count, 3);
        assert!(summary.summary().contains("Average Estimated AQI: 91.67"));
        assert!(summary.summary().contains("Max Estimated AQI: 175"));
    }

    #[test]
    fn test_summary_empty_view() {
        let ds = dataset(&[]);
        assert_eq!(AqiAnalyzer::new().summary(&ds.view()), None);
    }

    #[test]
    fn test_group_mean_by_city() {
        let ds = dataset(&[
            (Some("CityA"), "Good", 25.0),
            (Some("CityA"), "Moderate", 75.0),
            (Some("CityB"), "Unhealthy", 175.0),
        ]);

        let groups = AqiAnalyzer::new().group_mean_by_city(&ds.view());
        let expected: BTreeMap<String, f64> =
            [("CityA".to_string(), 50.0), ("CityB".to_string(), 175.0)].into();
        assert_eq!(groups, expected);
    }

    #[test]
    fn test_group_mean_keeps_raw_city_values() {
        let ds = dataset(&[
            (Some("  "), "Good", 25.0),
            (None, "Hazardous", 350.0),
            (Some("Oslo"), "Good", 25.0),
        ]);

        let groups = AqiAnalyzer::new().group_mean_by_city(&ds.view());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("  "), Some(&25.0));
        assert_eq!(groups.get("Oslo"), Some(&25.0));
    }

    #[test]
    fn test_category_counts() {
        let ds = dataset(&[
            (None, "Good", 25.0),
            (None, "Moderate", 75.0),
            (None, "Moderate", 75.0),
            (None, "Hazardous", 350.0),
        ]);

        let shares = AqiAnalyzer::new().category_counts(&ds.view());
        let counts: Vec<_> = shares
            .iter()
            .map(|s| (s.category.as_str(), s.count))
            .collect();
        assert_eq!(counts, vec![("Moderate", 2), ("Good", 1), ("Hazardous", 1)]);

        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].percent, 50.0);
    }
}
