//! Event wiring: link clicks and back/forward both end in the router.

use wasm_bindgen::JsValue;
use web_sys::{Document, MouseEvent, PopStateEvent, Window};

use super::{SiteRouter, listen, query_all};
use crate::config::SiteConfig;
use crate::decor::menu;
use crate::router::{HistoryMode, NavTarget};

/// In-app `#id` links route through the router with history; everything else
/// (bare `#`, external pages, files) keeps its default behaviour. The href is
/// read at click time so links rewritten after startup still route correctly.
/// Only a click that actually changed page closes the mobile menu.
pub(super) fn bind_links(doc: &Document, config: &SiteConfig, router: &SiteRouter) -> Result<(), JsValue> {
    let nav_links = doc.get_element_by_id(&config.elements.nav_links);
    for link in query_all(doc, &config.link_selector)? {
        let router = router.clone();
        let nav_links = nav_links.clone();
        let active_class = config.active_class.clone();
        let el = link.clone();
        listen(&link, "click", move |evt: MouseEvent| {
            let href = el.get_attribute("href").unwrap_or_default();
            if let NavTarget::Page(id) = NavTarget::classify(&href) {
                evt.prevent_default();
                // Unknown targets are a silent no-op; the router logs them.
                if router.navigate(&id, HistoryMode::Push) {
                    if let Some(links) = &nav_links {
                        menu::close(links, &active_class);
                    }
                }
            }
        })?;
    }
    Ok(())
}

pub(super) fn bind_history(win: &Window, router: &SiteRouter) -> Result<(), JsValue> {
    let router = router.clone();
    listen(win, "popstate", move |_evt: PopStateEvent| {
        router.sync_from_address_bar();
    })
}
