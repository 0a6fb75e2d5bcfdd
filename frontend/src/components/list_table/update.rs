use common::list_view::row_menu::ListenerChange;
use yew::prelude::*;

use super::messages::Msg;
use super::row::TableRow;
use super::state::ListTable;

/// Returns `true` when the table has to re-render.
pub fn update<R: TableRow>(
    table: &mut ListTable<R>,
    ctx: &Context<ListTable<R>>,
    msg: Msg,
) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SetQuery(query) => table.view.set_query(query),
        Msg::SetFilter(key, value) => table.view.update_filters(|f| R::set_filter(f, key, value)),
        Msg::ClearFilters => table.view.clear_filters(),
        Msg::SetPageSize(size) => table.view.set_page_size(size),
        Msg::Navigate(nav) => table.view.navigate(nav, &props.rows),
        Msg::ToggleMenu(id) => {
            let change = table.view.menu_mut().toggle(&id);
            table.apply_listener(ctx, change);
        }
        Msg::PointerDown(target) => {
            let change = table.view.menu_mut().pointer_down(target);
            if change == ListenerChange::Keep {
                return false;
            }
            table.apply_listener(ctx, change);
        }
        Msg::Action(id, action) => {
            let change = table.view.menu_mut().close();
            table.apply_listener(ctx, change);
            props.on_row_action.emit((id, action));
        }
        Msg::RowClicked(id) => {
            if let Some(on_row_click) = &props.on_row_click {
                on_row_click.emit(id);
            }
            return false;
        }
    }
    true
}
