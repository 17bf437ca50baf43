/// PM2.5 AQI category label to estimated AQI value.
///
/// This is the single lookup used by the loader; labels must match exactly.
pub const CATEGORY_AQI: [(&str, f64); 6] = [
    ("Good", 25.0),
    ("Moderate", 75.0),
    ("Unhealthy for Sensitive Groups", 125.0),
    ("Unhealthy", 175.0),
    ("Very Unhealthy", 250.0),
    ("Hazardous", 350.0),
];

/// Look up the estimated AQI for a category label.
pub fn estimated_aqi(label: &str) -> Option<f64> {
    CATEGORY_AQI
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, value)| *value)
}
