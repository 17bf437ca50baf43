use crate::analyzers::CategoryShare;
use crate::error::Result;
use crate::models::{Dataset, DatasetView, Reading};
use crate::utils::constants::ESTIMATED_AQI_COLUMN;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// One reading projected onto a column list, serialized as an object in
/// column order.
struct RowRecord<'a> {
    columns: &'a [String],
    dataset: &'a Dataset,
    reading: &'a Reading,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            if column == ESTIMATED_AQI_COLUMN {
                map.serialize_entry(column, &self.reading.estimated_aqi)?;
            } else {
                let value = self
                    .dataset
                    .column_index(column)
                    .and_then(|i| self.reading.value(i))
                    .unwrap_or("");
                map.serialize_entry(column, value)?;
            }
        }
        map.end()
    }
}

/// A dataset view bound to the columns it should display.
pub struct ViewTable<'v, 'a> {
    view: &'v DatasetView<'a>,
    columns: Vec<String>,
}

impl<'v, 'a> ViewTable<'v, 'a> {
    /// Display every column of the underlying dataset.
    pub fn new(view: &'v DatasetView<'a>) -> Self {
        let columns = view
            .dataset()
            .columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self { view, columns }
    }

    pub fn with_columns(view: &'v DatasetView<'a>, columns: Vec<String>) -> Self {
        Self { view, columns }
    }

    fn cell(&self, reading: &Reading, column: &str) -> String {
        if column == ESTIMATED_AQI_COLUMN {
            format_aqi(reading.estimated_aqi)
        } else {
            self.view
                .dataset()
                .column_index(column)
                .and_then(|i| reading.value(i))
                .unwrap_or("")
                .to_string()
        }
    }

    /// Fixed-width text rendering with a header and separator line.
    pub fn render_text(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .view
            .iter()
            .map(|r| self.columns.iter().map(|c| self.cell(r, c)).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(c.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "{}", join_padded(self.columns.iter(), &widths));
        let _ = writeln!(
            out,
            "{}",
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-")
        );
        for row in &rows {
            let _ = writeln!(out, "{}", join_padded(row.iter(), &widths));
        }
        let _ = write!(out, "({} rows)", rows.len());
        out
    }
}

impl Serialize for ViewTable<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.view.len()))?;
        for reading in self.view {
            seq.serialize_element(&RowRecord {
                columns: &self.columns,
                dataset: self.view.dataset(),
                reading,
            })?;
        }
        seq.end()
    }
}

fn join_padded<'s>(cells: impl Iterator<Item = &'s String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Whole AQI values print without a fractional part.
pub fn format_aqi(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Text bar chart of mean AQI per city.
pub fn render_city_means(means: &BTreeMap<String, f64>) -> String {
    let label_width = means.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (city, mean) in means {
        let bar = "#".repeat((mean / 10.0).round() as usize);
        let _ = writeln!(
            out,
            "{:<width$} | {:>7.2} {}",
            city,
            mean,
            bar,
            width = label_width
        );
    }
    out.trim_end().to_string()
}

/// Text rendering of the category distribution.
pub fn render_category_shares(shares: &[CategoryShare]) -> String {
    let label_width = shares
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for share in shares {
        let _ = writeln!(
            out,
            "{:<width$} | {:>6} | {:>5.1}%",
            share.category,
            share.count,
            share.percent,
            width = label_width
        );
    }
    out.trim_end().to_string()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::DatasetReader;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
City,PM2.5 AQI Category,PM2.5 AQI Value
Delhi,Unhealthy,160
Lima,Good,12
";

    #[test]
    fn test_render_text_table() {
        let (dataset, _) = DatasetReader::new().load_from_reader(SAMPLE.as_bytes()).unwrap();
        let view = dataset.view();
        let text = ViewTable::new(&view).render_text();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "City  | PM2.5 AQI Category | PM2.5 AQI Value | Estimated AQI"
        );
        assert_eq!(lines[2], "Delhi | Unhealthy          | 160             | 175");
        assert_eq!(lines[3], "Lima  | Good               | 12              | 25");
        assert_eq!(lines[4], "(2 rows)");
    }

    #[test]
    fn test_json_rows_follow_column_order() {
        let (dataset, _) = DatasetReader::new().load_from_reader(SAMPLE.as_bytes()).unwrap();
        let view = dataset.view();
        let table = ViewTable::with_columns(
            &view,
            vec!["Estimated AQI".to_string(), "City".to_string()],
        );

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"Estimated AQI":175.0,"City":"Delhi"},{"Estimated AQI":25.0,"City":"Lima"}]"#
        );
    }

    #[test]
    fn test_format_aqi() {
        assert_eq!(format_aqi(75.0), "75");
        assert_eq!(format_aqi(91.666_666), "91.67");
    }

    #[test]
    fn test_render_city_means() {
        let means: BTreeMap<String, f64> =
            [("CityA".to_string(), 50.0), ("B".to_string(), 175.0)].into();
        let text = render_city_means(&means);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("B     |  175.00 {}", "#".repeat(18)));
        assert_eq!(lines[1], "CityA |   50.00 #####");
    }
}
