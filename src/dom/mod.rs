//! Browser side of the router: `web-sys` implementations of [`Toggle`] and
//! [`Browser`], one-time discovery of pages and nav controls, and the
//! [`Site`] object handed back to JS.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, ScrollBehavior, ScrollToOptions, Window, window};

use crate::config::SiteConfig;
use crate::decor;
use crate::error::SiteError;
use crate::log::{console_log, console_warn};
use crate::router::{
    Browser, HistoryMode, NavHighlighter, NavTarget, PageId, PageRegistry, Router, RouterHandle,
    Toggle, fragment_id,
};

mod binder;

pub(crate) type SiteRouter = RouterHandle<ClassToggle, WindowBrowser>;

// --- Toggle / Browser over web-sys -------------------------------------------

/// Adds or removes one CSS class on an element.
pub struct ClassToggle {
    el: Element,
    class: String,
}

impl ClassToggle {
    pub fn new(el: Element, class: &str) -> Self {
        Self { el, class: class.to_owned() }
    }
}

impl Toggle for ClassToggle {
    fn set_on(&self, on: bool) {
        if let Err(e) = self.el.class_list().toggle_with_force(&self.class, on) {
            console_warn!("class toggle on #{} failed: {:?}", self.el.id(), e);
        }
    }
}

pub struct WindowBrowser {
    window: Window,
}

impl WindowBrowser {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Browser for WindowBrowser {
    /// `location.hash` is percent-encoded (`#%C3%BCber` for `über`); ids are
    /// compared decoded. Malformed escapes are kept as typed.
    fn fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let raw = fragment_id(&hash)?;
        match js_sys::decode_uri_component(raw) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => Some(raw.to_owned()),
        }
    }

    fn push_fragment(&mut self, page: &PageId) {
        let pushed = self
            .window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&page.fragment())));
        if let Err(e) = pushed {
            console_warn!("history push for `{page}` failed: {e:?}");
        }
    }

    fn scroll_to_top(&mut self) {
        smooth_scroll_top(&self.window);
    }
}

pub(crate) fn smooth_scroll_top(window: &Window) {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Adds an event listener that lives as long as the page.
pub(crate) fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        if let Ok(evt) = evt.dyn_into::<E>() {
            handler(evt);
        }
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

// --- Discovery ----------------------------------------------------------------

fn collect_pages(doc: &Document, config: &SiteConfig) -> Result<PageRegistry<ClassToggle>, SiteError> {
    let mut pairs = Vec::new();
    for el in query_all(doc, &config.page_selector)? {
        let id = el.id();
        if id.is_empty() {
            console_warn!("skipping `{}` container without an id", config.page_selector);
            continue;
        }
        pairs.push((id, ClassToggle::new(el, &config.active_class)));
    }
    Ok(PageRegistry::new(pairs)?)
}

fn collect_nav_controls(doc: &Document, config: &SiteConfig) -> Result<NavHighlighter<ClassToggle>, SiteError> {
    let mut links = Vec::new();
    for el in query_all(doc, &config.nav_selector)? {
        let href = el.get_attribute("href").unwrap_or_default();
        if let NavTarget::Page(id) = NavTarget::classify(&href) {
            links.push((id, ClassToggle::new(el, &config.active_class)));
        }
    }
    Ok(NavHighlighter::new(links))
}

// --- Site ---------------------------------------------------------------------

/// The running site, returned to JS by `start_site`.
#[wasm_bindgen]
pub struct Site {
    router: SiteRouter,
}

#[wasm_bindgen]
impl Site {
    /// Switches page and pushes a history entry. Returns false for unknown ids.
    pub fn navigate(&self, id: &str) -> bool {
        self.router.navigate(id, HistoryMode::Push)
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> String {
        self.router.current_page().as_str().to_owned()
    }

    #[wasm_bindgen(getter, js_name = pageIds)]
    pub fn page_ids(&self) -> Vec<String> {
        self.router
            .with(|r| r.registry().ids().map(|id| id.as_str().to_owned()).collect())
    }
}

pub(crate) fn mount(config: &SiteConfig) -> Result<Site, SiteError> {
    let win = window().ok_or(SiteError::NoWindow)?;
    let doc = win.document().ok_or(SiteError::NoDocument)?;

    let registry = collect_pages(&doc, config)?;
    let page_count = registry.len();
    let router = RouterHandle::new(Router::start(
        registry,
        WindowBrowser::new(win.clone()),
        &config.default_page,
    )?);

    let nav = collect_nav_controls(&doc, config)?;
    let nav_count = nav.len();
    router.subscribe(move |page| nav.refresh(page));

    binder::bind_links(&doc, config, &router)?;
    binder::bind_history(&win, &router)?;

    decor::install(&win, &doc, config);

    console_log!(
        "site ready: {page_count} pages, {nav_count} nav controls, showing `{}`",
        router.current_page()
    );
    Ok(Site { router })
}
