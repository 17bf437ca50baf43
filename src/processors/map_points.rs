use crate::models::DatasetView;
use serde::{Deserialize, Serialize};

/// A reading positioned for the map display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub estimated_aqi: f64,
}

/// Readings with both coordinates defined, renamed from `lat`/`lng` to
/// `latitude`/`longitude`. Rows missing either coordinate are skipped.
pub fn map_points(view: &DatasetView<'_>) -> Vec<MapPoint> {
    view.iter()
        .filter_map(|r| {
            r.coordinates().map(|(latitude, longitude)| MapPoint {
                city: r.city.clone(),
                latitude,
                longitude,
                category: r.category.clone(),
                estimated_aqi: r.estimated_aqi,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, Reading};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_map_points_skip_missing_coordinates() {
        let ds = Dataset::new(
            vec!["City".to_string(), "lat".to_string(), "lng".to_string()],
            vec![
                Reading::from_category(Some("Quito".to_string()), "Good")
                    .unwrap()
                    .with_coordinates(Some(-0.18), Some(-78.47)),
                Reading::from_category(Some("Quito".to_string()), "Moderate")
                    .unwrap()
                    .with_coordinates(None, Some(-78.47)),
            ],
        );

        let points = map_points(&ds.view());
        assert_eq!(
            points,
            vec![MapPoint {
                city: Some("Quito".to_string()),
                latitude: -0.18,
                longitude: -78.47,
                category: "Good".to_string(),
                estimated_aqi: 25.0,
            }]
        );

        let json = serde_json::to_value(&points[0]).unwrap();
        assert!(json.get("latitude").is_some());
        assert!(json.get("lat").is_none());
    }
}
