use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-explorer")]
#[command(about = "Explore air quality readings by city, threshold and PM2.5 category")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        help = "Input CSV file [default: air_quality_index.csv]"
    )]
    pub data: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: aqi-explorer.toml, optional]"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the loading spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe the dataset
    Overview,

    /// List the distinct city names
    Cities,

    /// Readings above an AQI threshold, optionally for one city
    CityView {
        #[arg(long, help = "City to show [default: all cities]")]
        city: Option<String>,

        #[arg(
            short,
            long,
            help = "Estimated AQI threshold, 0-500 [default: from settings, 100]"
        )]
        threshold: Option<f64>,

        #[arg(short, long = "pollutant", help = "Pollutant column to display (repeatable)")]
        pollutants: Vec<String>,
    },

    /// Overall AQI statistics, top readings and category distribution
    Summary {
        #[arg(long, help = "Number of top readings [default: from settings, 10]")]
        top: Option<usize>,
    },

    /// Geolocated readings for one city
    Map {
        #[arg(long, help = "City to show [default: first city]")]
        city: Option<String>,
    },

    /// Reading counts per PM2.5 AQI category
    Categories,
}
