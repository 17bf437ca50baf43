use crate::models::DatasetView;

/// The `n` highest readings by estimated AQI, highest first.
///
/// The sort is stable: readings with equal AQI keep their original row order.
pub fn top_n<'a>(view: &DatasetView<'a>, n: usize) -> DatasetView<'a> {
    let mut rows = view.rows().to_vec();
    rows.sort_by(|a, b| b.estimated_aqi.total_cmp(&a.estimated_aqi));
    rows.truncate(n);
    DatasetView::from_rows(view.dataset(), rows)
}
