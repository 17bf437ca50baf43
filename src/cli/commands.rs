use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::settings::Settings;
use crate::dashboard::{CityViewRequest, Dashboard, MapView};
use crate::error::Result;
use crate::readers::DatasetReader;
use crate::utils::constants::DEFAULT_FILTER_THRESHOLD;
use crate::utils::progress::ProgressReporter;
use crate::writers::{
    format_aqi, render_category_shares, render_city_means, to_json, ViewTable,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let (threshold, top) = match &cli.command {
        Commands::CityView { threshold, .. } => (*threshold, None),
        Commands::Summary { top } => (None, *top),
        _ => (None, None),
    };
    let settings =
        Settings::load(cli.config.as_deref())?.with_overrides(cli.data, threshold, top)?;
    let dashboard = load_dashboard(&settings, cli.quiet || cli.format == OutputFormat::Json)?;
    let format = cli.format;

    match cli.command {
        Commands::Overview => {
            let overview = dashboard.overview();
            match format {
                OutputFormat::Json => println!("{}", to_json(&overview)?),
                OutputFormat::Text => {
                    println!("{}\n", overview.title);
                    println!("{}\n", overview.description);
                    println!("Readings: {}", overview.readings);
                    println!("Cities: {}", overview.cities);
                    println!("Columns: {}", overview.columns.join(", "));
                }
            }
        }

        Commands::Cities => match format {
            OutputFormat::Json => println!("{}", to_json(dashboard.cities())?),
            OutputFormat::Text => {
                for city in dashboard.cities() {
                    println!("{}", city);
                }
            }
        },

        Commands::CityView { city, pollutants, .. } => {
            let request = CityViewRequest {
                city,
                threshold: settings.threshold,
                pollutants,
            };
            let view = dashboard.city_view(&request)?;
            let table = ViewTable::with_columns(&view.table, view.columns.clone());

            match format {
                OutputFormat::Json => {
                    let body = json!({
                        "city": request.city,
                        "threshold": request.threshold,
                        "rows": table,
                        "notice": view.notice,
                        "city_means": view.city_means,
                    });
                    println!("{}", to_json(&body)?);
                }
                OutputFormat::Text => {
                    println!("City-Based Air Quality Analysis\n");
                    println!("Filtered Data Table");
                    match view.notice {
                        Some(notice) => println!("{}", notice),
                        None => println!("{}", table.render_text()),
                    }
                    println!("\nAverage Estimated AQI by City");
                    println!("{}", render_city_means(&view.city_means));
                }
            }
        }

        Commands::Summary { .. } => {
            let top = settings.top_n;
            let view = dashboard.aqi_summary(top);

            match format {
                OutputFormat::Json => {
                    let body = json!({
                        "summary": view.summary,
                        "top": ViewTable::new(&view.top),
                        "moderate": ViewTable::new(&view.moderate),
                        "default_city": view.default_city,
                        "default_city_filter": ViewTable::new(&view.default_city_filter),
                        "categories": view.categories,
                    });
                    println!("{}", to_json(&body)?);
                }
                OutputFormat::Text => {
                    println!("Overall AQI Summary and Statistics\n");
                    match &view.summary {
                        Some(summary) => {
                            println!("Average Estimated AQI: {:.2}", summary.mean);
                            println!("Max Estimated AQI: {}", format_aqi(summary.max));
                        }
                        None => println!("No readings to summarize."),
                    }
                    println!("\nTop {} Highest AQI Readings", top);
                    println!("{}", ViewTable::new(&view.top).render_text());
                    println!("\nModerate AQI Records");
                    println!("{}", ViewTable::new(&view.moderate).render_text());
                    println!(
                        "\nMulti-Filtered AQI (city: {}, AQI > {})",
                        view.default_city.as_deref().unwrap_or("none"),
                        format_aqi(DEFAULT_FILTER_THRESHOLD)
                    );
                    println!("{}", ViewTable::new(&view.default_city_filter).render_text());
                    println!("\nAQI Category Distribution");
                    println!("{}", render_category_shares(&view.categories));
                }
            }
        }

        Commands::Map { city } => {
            let city = city.or_else(|| dashboard.cities().first().cloned());
            let view = dashboard.map_view(city.as_deref());

            match format {
                OutputFormat::Json => println!("{}", to_json(&view)?),
                OutputFormat::Text => match view {
                    MapView::Unavailable { message } => println!("{}", message),
                    MapView::Available { city, points } => {
                        println!(
                            "Geolocated readings for {}",
                            city.as_deref().unwrap_or("no city")
                        );
                        for point in &points {
                            println!(
                                "{:>10.4} {:>10.4}  {:>4}  {}",
                                point.latitude,
                                point.longitude,
                                format_aqi(point.estimated_aqi),
                                point.category
                            );
                        }
                        println!("({} points)", points.len());
                    }
                },
            }
        }

        Commands::Categories => {
            let shares = dashboard.categories();
            match format {
                OutputFormat::Json => println!("{}", to_json(&shares)?),
                OutputFormat::Text => println!("{}", render_category_shares(&shares)),
            }
        }
    }

    Ok(())
}

/// Load the dataset once and wrap it for the lifetime of the command.
fn load_dashboard(settings: &Settings, silent: bool) -> Result<Dashboard> {
    let progress = ProgressReporter::new_spinner("Loading air quality data...", silent);

    let dataset = DatasetReader::new().load(&settings.data_path)?;
    progress.finish_and_clear();

    info!(
        readings = dataset.len(),
        path = %settings.data_path.display(),
        "Dataset loaded"
    );
    Ok(Dashboard::new(Arc::new(dataset)))
}
