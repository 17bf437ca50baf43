//! Request/response surface over an immutable dataset.
//!
//! A [`Dashboard`] is built once from a loaded [`Dataset`]; every view is an
//! explicit call that borrows the shared data and never reloads it.

use crate::analyzers::{AqiAnalyzer, AqiSummary, CategoryShare};
use crate::error::{DashboardError, Result};
use crate::models::{Dataset, DatasetView};
use crate::processors::{
    default_city_filter, filter, filter_by_category, map_points, top_n, MapPoint,
};
use crate::utils::constants::{
    ESTIMATED_AQI_COLUMN, MAX_THRESHOLD, MIN_THRESHOLD, MODERATE_CATEGORY, NON_POLLUTANT_COLUMNS,
    NO_COORDINATES_NOTICE, NO_MATCH_NOTICE,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub const TITLE: &str = "Air Quality Index Explorer";

pub const DESCRIPTION: &str = "This application presents the World Air Quality Index dataset, \
which combines global pollution data with geographic coordinates and city-level information. \
The dataset includes PM2.5 AQI categories describing air quality classification across \
regions. Explore AQI data by city, review summary statistics, or list readings for the map.";

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub title: &'static str,
    pub description: &'static str,
    pub readings: usize,
    pub cities: usize,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CityViewRequest {
    pub city: Option<String>,
    pub threshold: f64,
    pub pollutants: Vec<String>,
}

pub struct CityView<'a> {
    pub table: DatasetView<'a>,
    /// Columns to display; every column when no pollutant was selected.
    pub columns: Vec<String>,
    pub notice: Option<&'static str>,
    /// Mean AQI per city over the whole dataset, independent of the filter.
    pub city_means: BTreeMap<String, f64>,
}

pub struct SummaryView<'a> {
    pub summary: Option<AqiSummary>,
    pub top: DatasetView<'a>,
    pub moderate: DatasetView<'a>,
    pub default_city: Option<String>,
    pub default_city_filter: DatasetView<'a>,
    pub categories: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapView {
    Available {
        city: Option<String>,
        points: Vec<MapPoint>,
    },
    Unavailable {
        message: &'static str,
    },
}

pub struct Dashboard {
    dataset: Arc<Dataset>,
    cities: Vec<String>,
    analyzer: AqiAnalyzer,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let cities = dataset.distinct_cities();
        debug!(readings = dataset.len(), cities = cities.len(), "Dashboard ready");

        Self {
            dataset,
            cities,
            analyzer: AqiAnalyzer::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Sorted, distinct, non-blank city names.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn overview(&self) -> Overview {
        Overview {
            title: TITLE,
            description: DESCRIPTION,
            readings: self.dataset.len(),
            cities: self.cities.len(),
            columns: self.dataset.columns().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn city_view(&self, request: &CityViewRequest) -> Result<CityView<'_>> {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&request.threshold) {
            return Err(DashboardError::InvalidSelection(format!(
                "AQI threshold {} is outside {}-{}",
                request.threshold, MIN_THRESHOLD, MAX_THRESHOLD
            )));
        }

        let columns = self.project_columns(&request.pollutants)?;
        let table = filter(&self.dataset.view(), request.city.as_deref(), request.threshold);
        let notice = table.is_empty().then_some(NO_MATCH_NOTICE);

        debug!(
            city = request.city.as_deref().unwrap_or("<all>"),
            threshold = request.threshold,
            rows = table.len(),
            "City view"
        );

        Ok(CityView {
            table,
            columns,
            notice,
            city_means: self.analyzer.group_mean_by_city(&self.dataset.view()),
        })
    }

    pub fn aqi_summary(&self, top: usize) -> SummaryView<'_> {
        let all = self.dataset.view();

        SummaryView {
            summary: self.analyzer.summary(&all),
            top: top_n(&all, top),
            moderate: filter_by_category(&all, MODERATE_CATEGORY),
            default_city: self.cities.first().cloned(),
            default_city_filter: default_city_filter(&self.dataset),
            categories: self.categories(),
        }
    }

    /// Category distribution over the whole dataset.
    pub fn categories(&self) -> Vec<CategoryShare> {
        self.analyzer.category_counts(&self.dataset.view())
    }

    /// Map points for one city. Without a city nothing matches, so the map
    /// is available but empty.
    pub fn map_view(&self, city: Option<&str>) -> MapView {
        if !self.dataset.has_coordinates() {
            return MapView::Unavailable {
                message: NO_COORDINATES_NOTICE,
            };
        }

        let selected = match city.filter(|c| !c.is_empty()) {
            Some(city) => self.dataset.view().retain(|r| r.city_is(city)),
            None => DatasetView::empty(&self.dataset),
        };

        MapView::Available {
            city: city.map(str::to_string),
            points: map_points(&selected),
        }
    }

    fn project_columns(&self, pollutants: &[String]) -> Result<Vec<String>> {
        let columns = self.dataset.columns();
        if pollutants.is_empty() {
            return Ok(columns.into_iter().map(str::to_string).collect());
        }

        let selectable = self.dataset.selectable_columns();
        if let Some(unknown) = pollutants.iter().find(|p| !selectable.contains(&p.as_str())) {
            return Err(DashboardError::InvalidSelection(format!(
                "'{}' is not a selectable pollutant column",
                unknown
            )));
        }

        // Identification columns stay visible alongside the selection.
        Ok(columns
            .into_iter()
            .enumerate()
            .filter(|(i, name)| {
                *i < NON_POLLUTANT_COLUMNS
                    || *name == ESTIMATED_AQI_COLUMN
                    || pollutants.iter().any(|p| p == name)
            })
            .map(|(_, name)| name.to_string())
            .collect())
    }
}
