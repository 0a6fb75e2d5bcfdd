//! Generic list table shared by the courses, students, enrolled-courses and
//! faculty screens.
//!
//! Search, filters, pagination and the row action menu live in
//! `common::list_view`; this component only renders that state and turns
//! DOM events into messages. Row types plug in through [`TableRow`].

use yew::prelude::*;

mod messages;
mod outside_click;
mod props;
mod row;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ListTableProps;
pub use row::TableRow;
pub use state::ListTable;

impl<R: TableRow> Component for ListTable<R> {
    type Message = Msg;
    type Properties = ListTableProps<R>;

    fn create(ctx: &Context<Self>) -> Self {
        ListTable::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
