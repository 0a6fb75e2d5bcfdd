use common::list_view::row_menu::{ClickTarget, MENU_CLASS, TRIGGER_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};
use yew::Callback;

/// Document-level `mousedown` listener that lives exactly as long as this
/// value. Dropping it removes the listener.
pub struct OutsideClickListener {
    document: Document,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl OutsideClickListener {
    /// Installs the listener. Every pointer-down on the page is classified
    /// against the row menu marker classes and sent to `on_pointer_down`.
    pub fn install(on_pointer_down: Callback<ClickTarget>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            on_pointer_down.emit(classify(&e));
        });
        document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .ok()?;
        log::debug!("row menu outside-click listener installed");
        Some(Self { document, closure })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        self.document
            .remove_event_listener_with_callback("mousedown", self.closure.as_ref().unchecked_ref())
            .ok();
        log::debug!("row menu outside-click listener removed");
    }
}

fn classify(e: &MouseEvent) -> ClickTarget {
    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::default();
    };
    let inside = |class: &str| {
        element
            .closest(&format!(".{}", class))
            .ok()
            .flatten()
            .is_some()
    };
    ClickTarget {
        in_trigger: inside(TRIGGER_CLASS),
        in_menu: inside(MENU_CLASS),
    }
}
