use std::rc::Rc;

use common::config::DashboardConfig;
use common::list_view::row_menu::ListenerChange;
use common::list_view::ListViewState;
use yew::prelude::*;

use super::messages::Msg;
use super::outside_click::OutsideClickListener;
use super::row::TableRow;

pub struct ListTable<R: TableRow> {
    /// Query, filters, page and open row menu.
    pub view: ListViewState<R>,

    pub config: Rc<DashboardConfig>,

    /// Present only while a row menu is open.
    pub listener: Option<OutsideClickListener>,
}

impl<R: TableRow> ListTable<R> {
    pub fn new(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<Rc<DashboardConfig>>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        Self {
            view: ListViewState::new(config.default_page_size, ctx.props().reset_policy),
            config,
            listener: None,
        }
    }

    pub fn apply_listener(&mut self, ctx: &Context<Self>, change: ListenerChange) {
        match change {
            ListenerChange::Install => {
                self.listener =
                    OutsideClickListener::install(ctx.link().callback(Msg::PointerDown));
            }
            ListenerChange::Remove => self.listener = None,
            ListenerChange::Keep => {}
        }
    }
}
