use common::config::DashboardConfig;
use common::list_view::query::ListRow;
use yew::Html;

use crate::components::filter_bar::FilterControl;

/// A record type the generic list table knows how to render and filter.
pub trait TableRow: ListRow + 'static {
    const SEARCH_PLACEHOLDER: &'static str;

    fn headers() -> &'static [&'static str];

    /// One cell per header, in header order.
    fn cells(&self) -> Vec<Html>;

    /// Filter widgets for the bar above the table, built from the rows
    /// currently in the source and the active filters.
    fn filter_controls(
        source: &[Self],
        filters: &Self::Filters,
        config: &DashboardConfig,
    ) -> Vec<FilterControl>;

    /// Applies a value emitted by the control named `key`.
    fn set_filter(filters: &mut Self::Filters, key: &str, value: String);
}
