pub mod category;
pub mod dataset;
pub mod reading;

pub use category::{estimated_aqi, CATEGORY_AQI};
pub use dataset::{Dataset, DatasetView};
pub use reading::Reading;
