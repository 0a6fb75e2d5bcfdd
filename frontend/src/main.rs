use std::rc::Rc;

use crate::app::{App, AppProps};

mod app;
mod components;
mod logging;
mod settings;
mod sheet;
mod toast;

fn main() {
    let config = settings::load();
    logging::init(config.log_level());
    log::info!("starting tutor admin dashboard");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
