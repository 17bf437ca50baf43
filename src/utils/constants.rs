/// Column names
pub const CATEGORY_COLUMN: &str = "PM2.5 AQI Category";
pub const CITY_COLUMN: &str = "City";
pub const LATITUDE_COLUMN: &str = "lat";
pub const LONGITUDE_COLUMN: &str = "lng";
pub const ESTIMATED_AQI_COLUMN: &str = "Estimated AQI";

/// Cell values read as "no value", matching the usual CSV missing-value markers
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Number of leading source columns that are not pollutant measurements
pub const NON_POLLUTANT_COLUMNS: usize = 3;

/// File names
pub const DEFAULT_DATA_FILE: &str = "air_quality_index.csv";
pub const DEFAULT_CONFIG_FILE: &str = "aqi-explorer.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "AQI_EXPLORER";

/// Threshold used by the filter functions when none is given
pub const DEFAULT_FILTER_THRESHOLD: f64 = 50.0;

/// Threshold selector domain and default
pub const MIN_THRESHOLD: f64 = 0.0;
pub const MAX_THRESHOLD: f64 = 500.0;
pub const DEFAULT_VIEW_THRESHOLD: f64 = 100.0;

/// Summary view defaults
pub const DEFAULT_TOP_N: usize = 10;
pub const MODERATE_CATEGORY: &str = "Moderate";

/// Messages handed to the presentation layer
pub const NO_MATCH_NOTICE: &str =
    "No data matches your filter. Try a different city or lower the AQI threshold.";
pub const NO_COORDINATES_NOTICE: &str = "Latitude/Longitude data not available in the file.";
