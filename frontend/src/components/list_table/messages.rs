use common::list_view::pagination::PageNav;
use common::list_view::row_menu::{ClickTarget, RowAction};

pub enum Msg {
    SetQuery(String),
    SetFilter(&'static str, String),
    ClearFilters,
    SetPageSize(usize),
    Navigate(PageNav),
    ToggleMenu(String),
    PointerDown(ClickTarget),
    Action(String, RowAction),
    RowClicked(String),
}
