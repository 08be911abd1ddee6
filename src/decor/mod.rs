//! Decorative widgets around the router. Each one looks up its own elements
//! once, logs and skips itself when they are missing, and never touches router
//! state.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::config::SiteConfig;
use crate::log::{console_log, console_warn};

pub(crate) mod menu;
pub mod particles;
mod profile;
mod reveal;
pub mod skill_web;

pub(crate) fn install(win: &Window, doc: &Document, config: &SiteConfig) {
    report("particles", particles::install(doc, config));
    report("skill web", skill_web::install(doc, config));
    report("menu toggle", menu::install_toggle(doc, config));
    report("scroll-to-top", menu::install_scroll_top(win, doc, config));
    report("scroll reveal", reveal::install(doc, config));
    report("profile fallback", profile::install(doc, config));
}

fn report(widget: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        console_warn!("{widget}: setup failed: {e:?}");
    }
}

/// Looks up `#id`, logging when the page does not have it.
pub(crate) fn element(doc: &Document, id: &str, widget: &str) -> Option<Element> {
    let found = doc.get_element_by_id(id);
    if found.is_none() {
        console_log!("{widget}: #{id} not found, skipping");
    }
    found
}
