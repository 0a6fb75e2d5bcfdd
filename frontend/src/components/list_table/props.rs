use std::rc::Rc;

use common::list_view::pagination::PageResetPolicy;
use common::list_view::row_menu::RowAction;
use yew::prelude::*;

use super::row::TableRow;

#[derive(Properties, PartialEq)]
pub struct ListTableProps<R: TableRow> {
    /// The full, unfiltered source rows.
    pub rows: Rc<Vec<R>>,

    /// Whether query and filter changes send the table back to page 1.
    pub reset_policy: PageResetPolicy,

    /// Fired with the row id when an entry of the row menu is chosen.
    pub on_row_action: Callback<(String, RowAction)>,

    /// Fired with the row id when a row body is clicked.
    #[prop_or_default]
    pub on_row_click: Option<Callback<String>>,

    /// Shows the floating add button when set.
    #[prop_or_default]
    pub on_add: Option<Callback<()>>,
}
