use gloo_timers::callback::Timeout;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Node};
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

/// Class toggled on the sheet once it is in the DOM so the CSS transition runs.
const SHOW_CLASS: &str = "show";

pub struct ModalSheet {
    pub id: String,
    node_ref: NodeRef,
    backdrop_ref: NodeRef,
    reveal: Option<Timeout>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Close,
}

impl Component for ModalSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            backdrop_ref: NodeRef::default(),
            reveal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                if let Some(sheet) = self.node_ref.cast::<HtmlElement>() {
                    sheet.class_list().remove_1(SHOW_CLASS).ok();
                }
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if !ctx.props().open {
            self.reveal = None;
        }
        old_props != ctx.props()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let link = ctx.link();
        // Only presses that land on the backdrop itself close the sheet.
        let backdrop_ref = self.backdrop_ref.clone();
        let on_backdrop = link.batch_callback(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            (target.is_some() && target == backdrop_ref.get()).then_some(Msg::Close)
        });

        html! {
            <div class="sheet-backdrop" ref={self.backdrop_ref.clone()} onmousedown={on_backdrop}>
                <div
                    class={classes!("top-sheet", props.wide.then_some("wide"))}
                    id={self.id.clone()}
                    ref={self.node_ref.clone()}
                    role="dialog"
                >
                    <div class="sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Close" onclick={link.callback(|_| Msg::Close)}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </div>
                    <div class="sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().open || self.reveal.is_some() {
            return;
        }
        let node_ref = self.node_ref.clone();
        self.reveal = Some(Timeout::new(50, move || {
            if let Some(sheet) = node_ref.cast::<HtmlElement>() {
                sheet.class_list().add_1(SHOW_CLASS).ok();
            }
        }));
    }
}
