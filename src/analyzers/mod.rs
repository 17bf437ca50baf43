pub mod aqi_analyzer;

pub use aqi_analyzer::{AqiAnalyzer, AqiSummary, CategoryShare};
