//! Adds a class to sections as they first scroll into view. The class is
//! never removed.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::query_all;
use crate::log::console_log;

pub(crate) fn install(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let sections = query_all(doc, &config.reveal.selector)?;
    if sections.is_empty() {
        console_log!("scroll reveal: no `{}` elements, skipping", config.reveal.selector);
        return Ok(());
    }

    let class = config.reveal.class.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(&class);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    init.set_root_margin(&config.reveal.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
