use crate::error::{DashboardError, Result};

/// Convert DMS (Degrees:Minutes:Seconds) format to decimal degrees
///
/// # Examples
/// ```
/// use aqi_explorer::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("28:36:50").unwrap();
/// assert!((decimal - 28.613889).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let parts: Vec<&str> = dms.split(':').collect();

    if parts.len() != 3 {
        return Err(DashboardError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected format: 'DD:MM:SS'",
            dms
        )));
    }

    let is_negative = dms.starts_with('-');

    let degrees = parts[0].parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid degrees value: '{}'", parts[0]))
    })?;
    let minutes = parts[1].parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid minutes value: '{}'", parts[1]))
    })?;
    let seconds = parts[2].parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid seconds value: '{}'", parts[2]))
    })?;

    if !(0.0..60.0).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
        return Err(DashboardError::InvalidCoordinate(format!(
            "Minutes and seconds must be between 0 and 60, got: '{}'",
            dms
        )));
    }

    let decimal_value = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    if is_negative {
        Ok(-decimal_value)
    } else {
        Ok(decimal_value)
    }
}

/// Parse a coordinate cell that might be in decimal or DMS format.
///
/// Empty cells are an error; callers treat any error as "no coordinate".
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    if trimmed.is_empty() {
        return Err(DashboardError::InvalidCoordinate(
            "Empty coordinate value".to_string(),
        ));
    }

    if trimmed.contains(':') {
        return dms_to_decimal(trimmed);
    }

    let value = trimmed.parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(DashboardError::InvalidCoordinate(format!(
            "Non-finite coordinate value: '{}'",
            coord_str
        )))
    }
}
