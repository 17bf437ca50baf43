pub mod map_points;
pub mod ranking;
pub mod view_filter;

pub use map_points::{map_points, MapPoint};
pub use ranking::top_n;
pub use view_filter::{default_city_filter, filter, filter_by_category, filter_by_city_and_threshold};
