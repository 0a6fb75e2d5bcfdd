//! Search box plus filter widgets above a list table.
//!
//! Fully controlled: the query and selections come in as props and every
//! change goes back out through a callback. The only local state is which
//! checklist popover is open.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// One filter widget.
#[derive(Clone, PartialEq)]
pub enum FilterControl {
    /// Single-choice dropdown. An empty value means "all".
    Select {
        key: &'static str,
        label: &'static str,
        options: Vec<String>,
        selected: Option<String>,
    },
    /// Multi-choice checkbox popover. Each toggle emits the toggled option.
    Checklist {
        key: &'static str,
        label: &'static str,
        options: Vec<String>,
        selected: Vec<String>,
    },
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub query: AttrValue,
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub controls: Vec<FilterControl>,
    /// Whether anything is filtered, which enables "Clear".
    pub active: bool,
    pub on_query: Callback<String>,
    pub on_filter: Callback<(&'static str, String)>,
    pub on_clear: Callback<()>,
}

pub enum Msg {
    TogglePopover(&'static str),
}

pub struct FilterBar {
    open_popover: Option<&'static str>,
}

impl Component for FilterBar {
    type Message = Msg;
    type Properties = FilterBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open_popover: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TogglePopover(key) => {
                self.open_popover = if self.open_popover == Some(key) {
                    None
                } else {
                    Some(key)
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_query = props.on_query.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            on_query.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        });
        let on_clear = props.on_clear.clone();

        html! {
            <div class="filter-bar">
                <div class="search-box">
                    <i class="material-icons">{"search"}</i>
                    <input
                        type="text"
                        value={props.query.clone()}
                        placeholder={props.placeholder.clone()}
                        {oninput}
                    />
                </div>
                { for props.controls.iter().map(|control| self.control(ctx, control)) }
                <button
                    class="btn-text"
                    disabled={!props.active}
                    onclick={Callback::from(move |_| on_clear.emit(()))}
                >
                    {"Clear"}
                </button>
            </div>
        }
    }
}

impl FilterBar {
    fn control(&self, ctx: &Context<Self>, control: &FilterControl) -> Html {
        let on_filter = ctx.props().on_filter.clone();
        match control {
            FilterControl::Select {
                key,
                label,
                options,
                selected,
            } => {
                let key = *key;
                let onchange = Callback::from(move |e: Event| {
                    on_filter.emit((key, e.target_unchecked_into::<HtmlSelectElement>().value()));
                });
                let current = selected.as_deref().unwrap_or_default();
                html! {
                    <select class="filter-select" aria-label={*label} {onchange}>
                        <option value="" selected={current.is_empty()}>{ format!("All {}", label) }</option>
                        { for options.iter().map(|option| html! {
                            <option value={option.clone()} selected={current == option}>{ option.clone() }</option>
                        }) }
                    </select>
                }
            }
            FilterControl::Checklist {
                key,
                label,
                options,
                selected,
            } => {
                let key = *key;
                let open = self.open_popover == Some(key);
                let badge = if selected.is_empty() {
                    html! {}
                } else {
                    html! { <span class="badge">{ selected.len().to_string() }</span> }
                };
                html! {
                    <div class="filter-popover">
                        <button
                            class={classes!("btn-outline", open.then_some("active"))}
                            onclick={ctx.link().callback(move |_| Msg::TogglePopover(key))}
                        >
                            <i class="material-icons">{"filter_list"}</i>
                            { *label }
                            { badge }
                        </button>
                        if open {
                            <div class="popover-content">
                                { for options.iter().map(|option| {
                                    let on_filter = on_filter.clone();
                                    let value = option.clone();
                                    let id = format!("filter-{}-{}", key, option);
                                    html! {
                                        <label class="checkbox-row" for={id.clone()}>
                                            <input
                                                type="checkbox"
                                                id={id}
                                                checked={selected.contains(option)}
                                                onchange={Callback::from(move |_| on_filter.emit((key, value.clone())))}
                                            />
                                            { option.clone() }
                                        </label>
                                    }
                                }) }
                            </div>
                        }
                    </div>
                }
            }
        }
    }
}
