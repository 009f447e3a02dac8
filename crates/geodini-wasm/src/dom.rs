//! DOM-backed surfaces: results table, drawer, address bar, spinner, notices.
use std::cell::Cell;

use geodini_core::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Url, Window};

const HIDDEN: &str = "hidden";

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    let toggled = if hidden {
        classes.add_1(HIDDEN)
    } else {
        classes.remove_1(HIDDEN)
    };
    if let Err(e) = toggled {
        web_sys::console::error_2(&"class toggle failed".into(), &e);
    }
}

/// The results section of the page.
pub struct DomResults {
    document: Document,
    container: HtmlElement,
    body: HtmlElement,
    count: HtmlElement,
    time: HtmlElement,
    no_results: HtmlElement,
    info: HtmlElement,
    table: Option<Element>,
}

impl DomResults {
    pub fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            container: element_by_id(document, "results-container")?,
            body: element_by_id(document, "results-body")?,
            count: element_by_id(document, "result-count")?,
            time: element_by_id(document, "query-time")?,
            no_results: element_by_id(document, "no-results")?,
            info: element_by_id(document, "search-info")?,
            table: document.query_selector(".results-table-container")?,
        })
    }

    /// The `<tbody>` rows are appended to; clicks on it are delegated.
    pub fn body(&self) -> &HtmlElement {
        &self.body
    }

    fn create(&self, tag: &str, class: Option<&str>) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        if let Some(class) = class {
            element.set_class_name(class);
        }
        Ok(element)
    }

    fn text_cell(&self, text: &str) -> Result<Element, JsValue> {
        let cell = self.create("td", None)?;
        cell.set_text_content(Some(text));
        Ok(cell)
    }

    fn build_row(&self, row: &RowView<'_>) -> Result<Element, JsValue> {
        let tr = self.create("tr", None)?;
        let name = self.create("td", None)?;

        match row.badge {
            Badge::None => {}
            Badge::Preferred => {
                tr.set_class_name("ai-preferred");
                let holder = self.create("span", Some("ai-star-container"))?;
                let star = self.create("i", Some("fas fa-star ai-star"))?;
                if let Some(tip) = row.badge_tooltip() {
                    star.set_attribute("title", &tip)?;
                }
                holder.append_child(&star)?;
                name.append_child(&holder)?;
            }
            Badge::NextProbable(rank) => {
                tr.set_class_name("ai-next-probable");
                tr.set_attribute("data-rank", &rank.to_string())?;
                let holder = self.create("span", Some("ai-rank-container"))?;
                if let Some(tip) = row.badge_tooltip() {
                    holder.set_attribute("title", &tip)?;
                }
                holder.set_text_content(row.badge_label().as_deref());
                name.append_child(&holder)?;
            }
        }
        name.append_child(&self.document.create_text_node(row.name))?;
        tr.append_child(&name)?;

        tr.append_child(&self.text_cell(row.subtype)?)?;
        tr.append_child(&self.text_cell(row.country)?)?;
        tr.append_child(&self.text_cell(&row.hierarchy)?)?;

        let action = self.create("td", None)?;
        match row.map_action {
            MapAction::Show { index } => {
                let button = self.create("button", Some("action-button"))?;
                button.set_attribute("data-index", &index.to_string())?;
                button.append_child(&self.create("i", Some("fas fa-map-marker-alt"))?)?;
                button.append_child(&self.document.create_text_node(" Show on Map"))?;
                action.append_child(&button)?;
            }
            MapAction::Unavailable => {
                let note = self.create("span", Some("no-geometry"))?;
                note.set_text_content(Some("No geometry data"));
                action.append_child(&note)?;
            }
        }
        tr.append_child(&action)?;
        Ok(tr)
    }

    fn remove_banners(&self) -> Result<(), JsValue> {
        let banners = self.document.query_selector_all(".ai-ranking-info")?;
        for i in 0..banners.length() {
            if let Some(node) = banners.item(i) {
                if let Some(parent) = node.parent_node() {
                    parent.remove_child(&node)?;
                }
            }
        }
        Ok(())
    }

    fn insert_banner(&self) -> Result<(), JsValue> {
        let banner = self.create("div", Some("ai-ranking-info"))?;
        banner.append_child(&self.create("i", Some("fas fa-robot"))?)?;
        let text = self.create("span", None)?;
        text.set_text_content(Some("Results are ranked by AI based on relevance to your query"));
        banner.append_child(&text)?;
        match &self.table {
            Some(table) => {
                self.container.insert_before(&banner, Some(&**table))?;
            }
            None => {
                self.container.append_child(&banner)?;
            }
        }
        Ok(())
    }
}

fn report(what: &str, outcome: Result<(), JsValue>) {
    if let Err(e) = outcome {
        web_sys::console::error_2(&what.into(), &e);
    }
}

impl ResultSurface for DomResults {
    fn clear_rows(&mut self) {
        self.body.set_inner_html("");
    }

    fn append_row(&mut self, row: &RowView<'_>) {
        let appended = self
            .build_row(row)
            .and_then(|tr| self.body.append_child(&tr).map(|_| ()));
        report("failed to render result row", appended);
    }

    fn set_summary(&mut self, summary: &ResultsSummary) {
        self.count.set_text_content(Some(&summary.count_text()));
        self.time.set_text_content(Some(&summary.time_text()));
    }

    fn set_panel(&mut self, state: PanelState) {
        set_hidden(&self.container, state == PanelState::Hidden);
        set_hidden(&self.no_results, state != PanelState::NoResults);
        if let Some(table) = &self.table {
            set_hidden(table, state != PanelState::Table);
        }
    }

    fn set_ranking_banner(&mut self, visible: bool) {
        let mut outcome = self.remove_banners();
        if visible && outcome.is_ok() {
            outcome = self.insert_banner();
        }
        report("failed to update ranking banner", outcome);
    }

    fn set_info_panel(&mut self, visible: bool) {
        set_hidden(&self.info, !visible);
    }
}

/// The slide-in map drawer and its backdrop.
pub struct DomDrawer {
    drawer: HtmlElement,
    backdrop: HtmlElement,
    title: HtmlElement,
}

impl DomDrawer {
    pub fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            drawer: element_by_id(document, "map-drawer")?,
            backdrop: element_by_id(document, "overlay")?,
            title: element_by_id(document, "map-title")?,
        })
    }

    pub fn backdrop(&self) -> &HtmlElement {
        &self.backdrop
    }
}

impl DrawerPanel for DomDrawer {
    fn show(&mut self) {
        report("failed to open drawer", self.drawer.class_list().add_1("open"));
        set_hidden(&self.backdrop, false);
    }

    fn hide(&mut self) {
        report("failed to close drawer", self.drawer.class_list().remove_1("open"));
        set_hidden(&self.backdrop, true);
    }

    fn set_title(&mut self, title: &str) {
        self.title.set_text_content(Some(title));
    }
}

/// `window.location` plus `history.replaceState`.
pub struct BrowserAddressBar {
    window: Window,
}

impl BrowserAddressBar {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn current_url(&self) -> Result<Url, JsValue> {
        Url::new(&self.window.location().href()?)
    }

    fn replace(&self, name: &str, value: Option<&str>) -> Result<(), JsValue> {
        let url = self.current_url()?;
        let params = url.search_params();
        match value {
            Some(value) => params.set(name, value),
            None => params.delete(name),
        }
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
    }
}

impl AddressBar for BrowserAddressBar {
    fn query_param(&self, name: &str) -> Option<String> {
        self.current_url().ok()?.search_params().get(name)
    }

    fn replace_query_param(&mut self, name: &str, value: Option<&str>) {
        report("failed to update address bar", self.replace(name, value));
    }
}

/// The spinner next to the search button.
#[derive(Clone)]
pub struct DomLoading {
    element: HtmlElement,
}

impl DomLoading {
    pub fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            element: element_by_id(document, "loading")?,
        })
    }
}

impl LoadingIndicator for DomLoading {
    fn show(&self) {
        set_hidden(&self.element, false);
    }

    fn hide(&self) {
        set_hidden(&self.element, true);
    }
}

/// Toast for failures. Never blocks the page.
pub struct DomNotice {
    window: Window,
    element: HtmlElement,
    dismissal: DismissTimer,
}

const NOTICE_MS: i32 = 4000;

/// The single dismissal timer a notice may have armed.
#[derive(Debug, Default)]
struct DismissTimer(Cell<Option<i32>>);

impl DismissTimer {
    /// Records `handle` as armed and returns the timer it replaces.
    fn arm(&self, handle: i32) -> Option<i32> {
        self.0.replace(Some(handle))
    }

    fn take(&self) -> Option<i32> {
        self.0.take()
    }
}

impl DomNotice {
    /// Uses `#notice` when the page has one, otherwise appends it to `<body>`.
    pub fn lookup(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let element = match element_by_id(document, "notice") {
            Ok(element) => element,
            Err(_) => {
                let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
                element.set_id("notice");
                element.set_class_name("notice hidden");
                element.set_attribute("role", "status")?;
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?
                    .append_child(&element)?;
                element
            }
        };
        Ok(Self {
            window: window.clone(),
            element,
            dismissal: DismissTimer::default(),
        })
    }

    /// Shows `message` for a few seconds. A newer notice cancels the
    /// dismissal of the one it replaces.
    pub fn show(&self, message: &str) {
        if let Some(previous) = self.dismissal.take() {
            self.window.clear_timeout_with_handle(previous);
        }
        self.element.set_text_content(Some(message));
        set_hidden(&self.element, false);

        let element = self.element.clone();
        let dismiss = Closure::once_into_js(move || set_hidden(&element, true));
        let scheduled = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                dismiss.unchecked_ref(),
                NOTICE_MS,
            );
        match scheduled {
            Ok(handle) => {
                self.dismissal.arm(handle);
            }
            Err(e) => report("failed to schedule notice dismissal", Err(e)),
        }
    }
}
