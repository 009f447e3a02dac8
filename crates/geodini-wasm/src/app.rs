//! The mounted page: owns the controller and wires DOM events to it.
use std::cell::RefCell;
use std::rc::Rc;

use geodini_core::prelude::*;
use geodini_core::DrawerState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, Window};

use crate::dom::{element_by_id, BrowserAddressBar, DomDrawer, DomLoading, DomNotice, DomResults};
use crate::fetch::fetch_search;
use crate::leaflet::LeafletWidget;
use crate::to_js_error;

const MAP_CONTAINER: &str = "map";

type Controller = SearchController<DomResults, LeafletWidget, DomDrawer, BrowserAddressBar>;

struct Shell {
    controller: RefCell<Controller>,
    endpoint: String,
    input: HtmlInputElement,
    loading: DomLoading,
    notice: DomNotice,
}

impl Shell {
    fn submit(shell: &Rc<Shell>) {
        let text = shell.input.value();
        let ticket = shell.controller.borrow_mut().submit(&text);
        if let Some(ticket) = ticket {
            Shell::run(shell, ticket);
        }
    }

    fn run(shell: &Rc<Shell>, ticket: SearchTicket) {
        let shell = Rc::clone(shell);
        spawn_local(async move {
            let outcome = {
                let _loading = LoadingGuard::acquire(shell.loading.clone());
                fetch_search(&shell.endpoint, &ticket.query).await
            };
            let completion = shell.controller.borrow_mut().complete(&ticket, outcome);
            match completion {
                Ok(Completion::Applied { rows }) => {
                    let line = format!("{rows} results for {:?}", ticket.query);
                    web_sys::console::log_1(&line.into());
                }
                Ok(Completion::Stale) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("search failed: {e}").into());
                    shell.notice.show(&e.notice());
                }
            }
        });
    }

    fn show_on_map(shell: &Rc<Shell>, index: usize) {
        let shown = shell.controller.borrow_mut().show_on_map(index);
        if let Err(e) = shown {
            shell.notice.show(&e.notice());
        }
    }

    fn close_map(shell: &Rc<Shell>) {
        shell.controller.borrow_mut().close_map();
    }

    fn input_changed(shell: &Rc<Shell>) {
        let text = shell.input.value();
        shell.controller.borrow_mut().input_changed(&text);
    }

    fn wire(shell: &Rc<Shell>, document: &Document) -> Result<(), JsValue> {
        let form = element_by_id(document, "search-form")?;
        listen(&form, "submit", shell, |shell, event| {
            event.prevent_default();
            Shell::submit(shell);
        })?;

        listen(&shell.input, "input", shell, |shell, _| Shell::input_changed(shell))?;

        let close = element_by_id(document, "close-map")?;
        listen(&close, "click", shell, |shell, _| Shell::close_map(shell))?;
        {
            let controller = shell.controller.borrow();
            let backdrop = controller.map().drawer().backdrop();
            listen(backdrop, "click", shell, |shell, _| Shell::close_map(shell))?;
        }

        // Rows are rebuilt on every search, so buttons are found by delegation.
        let body = shell.controller.borrow().view().surface().body().clone();
        listen(&body, "click", shell, |shell, event| {
            let index = closest(event, ".action-button")
                .and_then(|button| button.get_attribute("data-index"))
                .and_then(|raw| raw.parse::<usize>().ok());
            if let Some(index) = index {
                Shell::show_on_map(shell, index);
            }
        })?;

        listen(document, "click", shell, |shell, event| {
            let query = closest(event, ".clickable-example")
                .and_then(|example| example.get_attribute("data-query"));
            if let Some(query) = query {
                event.prevent_default();
                shell.input.set_value(&query);
                Shell::submit(shell);
            }
        })?;
        Ok(())
    }
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Registers `handler` for the lifetime of the page.
fn listen<F>(
    target: &EventTarget,
    kind: &str,
    shell: &Rc<Shell>,
    handler: F,
) -> Result<(), JsValue>
where
    F: Fn(&Rc<Shell>, &Event) + 'static,
{
    let shell = Rc::clone(shell);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(&shell, &event));
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// A Geodini search page bound to the current document.
///
/// ```javascript
/// import init, { GeodiniApp } from 'geodini-wasm';
///
/// await init();
/// const app = GeodiniApp.mount(null);
/// app.search('the other london');
/// ```
#[wasm_bindgen]
pub struct GeodiniApp {
    shell: Rc<Shell>,
}

#[wasm_bindgen]
impl GeodiniApp {
    /// Binds to the page. `config_json` overrides any `ClientConfig` field;
    /// pass `null` for the defaults. Runs the search named in `?q=` if any.
    pub fn mount(config_json: Option<String>) -> Result<GeodiniApp, JsValue> {
        let config = match config_json {
            Some(json) => ClientConfig::from_json(&json).map_err(to_js_error)?,
            None => ClientConfig::default(),
        };
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let input = element_by_id(&document, "search-query")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("#search-query is not an input"))?;
        let controller = SearchController::new(
            &config,
            DomResults::lookup(&document)?,
            LeafletWidget::create(MAP_CONTAINER)?,
            DomDrawer::lookup(&document)?,
            BrowserAddressBar::new(window.clone()),
        );
        let shell = Rc::new(Shell {
            controller: RefCell::new(controller),
            endpoint: config.search_endpoint(),
            input,
            loading: DomLoading::lookup(&document)?,
            notice: DomNotice::lookup(&window, &document)?,
        });
        Shell::wire(&shell, &document)?;

        let pending = shell.controller.borrow_mut().load_from_url();
        if let Some(ticket) = pending {
            shell.input.set_value(&ticket.query);
            Shell::run(&shell, ticket);
        }
        web_sys::console::log_1(&format!("Geodini mounted against {}", shell.endpoint).into());
        Ok(GeodiniApp { shell })
    }

    /// Same as typing `query` and pressing search.
    pub fn search(&self, query: &str) {
        self.shell.input.set_value(query);
        Shell::submit(&self.shell);
    }

    pub fn show_on_map(&self, index: usize) {
        Shell::show_on_map(&self.shell, index);
    }

    pub fn close_map(&self) {
        Shell::close_map(&self.shell);
    }

    #[wasm_bindgen(getter)]
    pub fn drawer_open(&self) -> bool {
        self.shell.controller.borrow().map().state() == DrawerState::Open
    }
}
