//! Mobile nav menu and the scroll-to-top button.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, MouseEvent, Window};

use super::element;
use crate::config::SiteConfig;
use crate::dom::{listen, smooth_scroll_top};

const SCROLL_BUTTON_CLASS: &str = "visible";

pub(crate) fn install_toggle(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(toggle) = element(doc, &config.elements.menu_toggle, "menu toggle") else {
        return Ok(());
    };
    let Some(links) = element(doc, &config.elements.nav_links, "menu toggle") else {
        return Ok(());
    };
    let class = config.active_class.clone();
    listen(&toggle, "click", move |_evt: MouseEvent| {
        let _ = links.class_list().toggle(&class);
    })
}

/// Closes the mobile menu.
pub(crate) fn close(nav_links: &Element, class: &str) {
    let _ = nav_links.class_list().remove_1(class);
}

pub fn scroll_button_visible(offset_y: f64, threshold: f64) -> bool {
    offset_y > threshold
}

pub(crate) fn install_scroll_top(win: &Window, doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(button) = element(doc, &config.elements.scroll_top, "scroll-to-top") else {
        return Ok(());
    };

    {
        let win_scroll = win.clone();
        let button = button.clone();
        let threshold = config.scroll_top_threshold;
        listen(win, "scroll", move |_evt: Event| {
            let offset = win_scroll.page_y_offset().unwrap_or(0.0);
            let _ = button
                .class_list()
                .toggle_with_force(SCROLL_BUTTON_CLASS, scroll_button_visible(offset, threshold));
        })?;
    }

    let win_click = win.clone();
    listen(&button, "click", move |_evt: MouseEvent| smooth_scroll_top(&win_click))
}
