//! Folio router core crate.
//!
//! Client-side behaviour for a single-page portfolio: a hash router that shows
//! exactly one pre-rendered page container at a time and keeps nav controls and
//! browser history in step with it, plus the decorative widgets around it
//! (particles, skill radar, mobile menu, scroll-to-top, scroll reveal, profile
//! image fallback).
//!
//! The router state machine in [`router`] has no browser dependency and runs on
//! the host. [`start_site`] wires it to the live DOM through `web-sys`.

use wasm_bindgen::prelude::*;

mod log; // first: the console macros are used by every module below

pub mod config;
pub mod decor;
mod dom;
pub mod error;
pub mod router;

pub use config::SiteConfig;
pub use dom::{ClassToggle, Site, WindowBrowser};
pub use error::{RegistryError, SiteError, UnknownPage};
pub use router::{HistoryMode, PageId, PageRegistry, Router, RouterHandle};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Boots the site once the DOM is parsed. `config_json` overrides any subset
/// of [`SiteConfig`]; pass nothing for the stock markup.
#[wasm_bindgen]
pub fn start_site(config_json: Option<String>) -> Result<Site, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(json)?,
        _ => SiteConfig::default(),
    };
    Ok(dom::mount(&config)?)
}
