//! Rendering for the list table: filter bar, rows with their action menu,
//! and the pagination footer.

use common::list_view::pagination::{PageNav, PageWindow};
use common::list_view::query::FilterSet;
use common::list_view::row_menu::{RowAction, MENU_CLASS, TRIGGER_CLASS};
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::row::TableRow;
use super::state::ListTable;
use crate::components::filter_bar::FilterBar;

pub fn view<R: TableRow>(table: &ListTable<R>, ctx: &Context<ListTable<R>>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let derived = table.view.view(&props.rows);
    let controls = R::filter_controls(&props.rows, table.view.filters(), &table.config);

    html! {
        <div class="list-table">
            <FilterBar
                query={table.view.query().to_string()}
                placeholder={R::SEARCH_PLACEHOLDER}
                {controls}
                active={table.view.is_filtered()}
                on_query={link.callback(Msg::SetQuery)}
                on_filter={link.callback(|(key, value): (&'static str, String)| Msg::SetFilter(key, value))}
                on_clear={link.callback(|_: ()| Msg::ClearFilters)}
            />
            <table>
                <thead>
                    <tr>
                        { for R::headers().iter().map(|h| html! { <th>{ *h }</th> }) }
                        <th class="actions-col">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if derived.rows.is_empty() {
                        <tr class="empty-row">
                            <td colspan={(R::headers().len() + 1).to_string()}>
                                { empty_message(table) }
                            </td>
                        </tr>
                    } else {
                        { for derived.rows.iter().map(|row| build_row(table, link, *row)) }
                    }
                </tbody>
            </table>
            { build_footer(table, link, &derived.window) }
            if let Some(on_add) = props.on_add.clone() {
                <button class="fab" title="Add" onclick={Callback::from(move |_| on_add.emit(()))}>
                    <i class="material-icons">{"add"}</i>
                </button>
            }
        </div>
    }
}

fn empty_message<R: TableRow>(table: &ListTable<R>) -> &'static str {
    if table.view.query().is_empty() && table.view.filters().is_empty() {
        "Nothing here yet."
    } else {
        "No results match the current search and filters."
    }
}

fn build_row<R: TableRow>(table: &ListTable<R>, link: &Scope<ListTable<R>>, row: &R) -> Html {
    let id = row.row_id().to_string();
    let open = table.view.menu().is_open(&id);
    let on_click = {
        let id = id.clone();
        link.callback(move |_| Msg::RowClicked(id.clone()))
    };
    let on_toggle = {
        let id = id.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::ToggleMenu(id.clone())
        })
    };

    html! {
        <tr key={id.clone()} class="clickable" onclick={on_click}>
            { for row.cells().into_iter().map(|cell| html! { <td>{ cell }</td> }) }
            <td class="actions-col" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class={classes!("icon-btn", TRIGGER_CLASS)} title="Actions" onclick={on_toggle}>
                    <i class="material-icons">{"more_vert"}</i>
                </button>
                if open {
                    <div class={classes!(MENU_CLASS)}>
                        { for RowAction::ALL.iter().map(|action| {
                            let id = id.clone();
                            let action = *action;
                            html! {
                                <button
                                    class="menu-item"
                                    onclick={link.callback(move |_| Msg::Action(id.clone(), action))}
                                >
                                    <i class="material-icons">{ action_icon(action) }</i>
                                    { action.to_string() }
                                </button>
                            }
                        }) }
                    </div>
                }
            </td>
        </tr>
    }
}

fn action_icon(action: RowAction) -> &'static str {
    match action {
        RowAction::View => "visibility",
        RowAction::Edit => "edit",
    }
}

fn build_footer<R: TableRow>(
    table: &ListTable<R>,
    link: &Scope<ListTable<R>>,
    window: &PageWindow,
) -> Html {
    let page_size = table.view.pagination().page_size();
    let on_size = link.batch_callback(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>()
            .value()
            .parse::<usize>()
            .ok()
            .map(Msg::SetPageSize)
    });
    let nav = |icon: &'static str, title: &'static str, to: PageNav, enabled: bool| {
        html! {
            <button
                class="icon-btn"
                title={title}
                disabled={!enabled}
                onclick={link.callback(move |_| Msg::Navigate(to))}
            >
                <i class="material-icons">{ icon }</i>
            </button>
        }
    };

    html! {
        <div class="table-footer">
            <label class="page-size">
                {"Rows per page"}
                <select onchange={on_size}>
                    { for table.config.page_size_options.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == page_size}>{ size.to_string() }</option>
                    }) }
                </select>
            </label>
            <span class="page-label">{ window.label() }</span>
            { nav("first_page", "First page", PageNav::First, window.has_prev()) }
            { nav("chevron_left", "Previous page", PageNav::Prev, window.has_prev()) }
            { nav("chevron_right", "Next page", PageNav::Next, window.has_next()) }
            { nav("last_page", "Last page", PageNav::Last, window.has_next()) }
        </div>
    }
}
