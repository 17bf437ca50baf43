pub mod table_writer;

pub use table_writer::{
    format_aqi, render_category_shares, render_city_means, to_json, ViewTable,
};
