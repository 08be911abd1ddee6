//! Replaces a broken profile photo with a gradient badge.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlImageElement};

use super::element;
use crate::config::SiteConfig;
use crate::dom::listen;

const BADGE_STYLE: &str = "width: 100%; height: 100%; \
    background: linear-gradient(135deg, var(--accent-primary), var(--accent-secondary)); \
    display: flex; align-items: center; justify-content: center; \
    font-size: 4rem; font-weight: 800; color: white;";

pub(crate) fn install(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(el) = element(doc, &config.elements.profile_img, "profile fallback") else {
        return Ok(());
    };
    let img: HtmlImageElement = el.dyn_into()?;

    // The image may have failed before the listener exists.
    if img.complete() && img.natural_width() == 0 && !img.src().is_empty() {
        return show_badge(doc, &img, &config.profile_initial);
    }

    let doc = doc.clone();
    let initial = config.profile_initial.clone();
    let target = img.clone();
    listen(&img, "error", move |_evt: Event| {
        let _ = show_badge(&doc, &target, &initial);
    })
}

fn show_badge(doc: &Document, img: &HtmlImageElement, initial: &str) -> Result<(), JsValue> {
    img.style().set_property("display", "none")?;
    let Some(parent) = img.parent_element() else {
        return Ok(());
    };
    let badge = doc.create_element("div")?;
    badge.set_attribute("style", BADGE_STYLE)?;
    badge.set_text_content(Some(initial));
    parent.set_inner_html("");
    parent.append_child(&badge)?;
    Ok(())
}
