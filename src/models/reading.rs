use super::category;

/// One retained row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Raw `City` cell; `None` for missing-value markers (including an empty
    /// cell) or when the column is absent.
    pub city: Option<String>,

    pub category: String,
    pub estimated_aqi: f64,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Raw cells in source header order.
    pub values: Vec<String>,
}

impl Reading {
    pub fn new(city: Option<String>, category: String, estimated_aqi: f64) -> Self {
        Self {
            city,
            category,
            estimated_aqi,
            latitude: None,
            longitude: None,
            values: Vec::new(),
        }
    }

    /// Build a reading whose AQI comes from the category table.
    /// Returns `None` when the label is not a known category.
    pub fn from_category(city: Option<String>, label: &str) -> Option<Self> {
        category::estimated_aqi(label).map(|aqi| Self::new(city, label.to_string(), aqi))
    }

    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn city_is(&self, city: &str) -> bool {
        self.city.as_deref() == Some(city)
    }

    /// City value suitable for a selection list: present and not blank.
    pub fn normalized_city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_category() {
        let reading = Reading::from_category(Some("Delhi".to_string()), "Moderate").unwrap();
        assert_eq!(reading.estimated_aqi, 75.0);
        assert_eq!(reading.category, "Moderate");

        assert!(Reading::from_category(None, "Smoky").is_none());
    }

    #[test]
    fn test_normalized_city() {
        let blank = Reading::new(Some("   ".to_string()), "Good".to_string(), 25.0);
        assert_eq!(blank.normalized_city(), None);
        assert!(blank.city_is("   "));

        let missing = Reading::new(None, "Good".to_string(), 25.0);
        assert_eq!(missing.normalized_city(), None);

        let named = Reading::new(Some("Lima".to_string()), "Good".to_string(), 25.0);
        assert_eq!(named.normalized_city(), Some("Lima"));
    }

    #[test]
    fn test_coordinates_need_both_axes() {
        let reading = Reading::new(None, "Good".to_string(), 25.0);
        assert_eq!(reading.clone().with_coordinates(Some(1.0), None).coordinates(), None);
        assert_eq!(
            reading.with_coordinates(Some(1.0), Some(2.0)).coordinates(),
            Some((1.0, 2.0))
        );
    }
}
