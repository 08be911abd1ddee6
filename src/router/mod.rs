//! Hash-based page switching.
//!
//! A [`Router`] owns the page registry and the single piece of mutable state,
//! the current page. Every transition goes through [`Router::switch_to`]. The
//! browser is only reached through the [`Browser`] and [`Toggle`] traits, so the
//! same state machine runs against `web-sys` in the page and against
//! [`MemoryBrowser`] / [`MemoryToggle`] on the host.
//!
//! Invariant: exactly one container is on, the one for `current_page()`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{RegistryError, UnknownPage};
use crate::log::{console_log, console_warn};

mod memory;
mod nav;
mod registry;

pub use memory::{MemoryBrowser, MemoryToggle};
pub use nav::{NavHighlighter, NavTarget, fragment_id};
pub use registry::PageRegistry;

/// Opaque page key: the container's element id and the address-bar fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `#id`, as written to the address bar.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Something that can be switched on or off: a page container (visible) or a
/// nav control (active).
pub trait Toggle {
    fn set_on(&self, on: bool);
}

/// The parts of the browser the router touches.
pub trait Browser {
    /// Page id in the address bar, without the `#`. `None` if absent or empty.
    fn fragment(&self) -> Option<String>;
    /// Appends a history entry whose fragment is `page`.
    fn push_fragment(&mut self, page: &PageId);
    /// Best-effort smooth scroll; never awaited.
    fn scroll_to_top(&mut self);
}

/// Whether a transition appends a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// User-initiated navigation.
    Push,
    /// Back/forward: the entry already exists.
    Skip,
}

type PageListener = Box<dyn FnMut(&PageId)>;

pub struct Router<C, B> {
    registry: PageRegistry<C>,
    browser: B,
    default_page: usize,
    current: usize,
    listeners: Vec<PageListener>,
}

impl<C: Toggle, B: Browser> Router<C, B> {
    /// Seeds the current page from the fragment when it names a registered
    /// page, else `default_page`, and shows only that container. Startup neither
    /// scrolls nor touches history.
    pub fn start(registry: PageRegistry<C>, browser: B, default_page: &str) -> Result<Self, RegistryError> {
        let default_idx = registry
            .position(default_page)
            .ok_or_else(|| RegistryError::NotFound(default_page.to_owned()))?;
        let current = resolve_fragment(&registry, &browser, default_idx);
        for (idx, (_, container)) in registry.iter().enumerate() {
            container.set_on(idx == current);
        }
        Ok(Self {
            registry,
            browser,
            default_page: default_idx,
            current,
            listeners: Vec::new(),
        })
    }

    pub fn current_page(&self) -> &PageId {
        self.registry.id_at(self.current)
    }

    pub fn default_page(&self) -> &PageId {
        self.registry.id_at(self.default_page)
    }

    pub fn registry(&self) -> &PageRegistry<C> {
        &self.registry
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    /// Registers a page-change listener and immediately calls it with the
    /// current page, so late subscribers start in sync.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&PageId) + 'static) {
        listener(self.registry.id_at(self.current));
        self.listeners.push(Box::new(listener));
    }

    /// Shows page `id`. Unknown ids change nothing and return [`UnknownPage`].
    ///
    /// Switching to the current page is not short-circuited: show/hide, the
    /// scroll and the listeners all run again.
    pub fn switch_to(&mut self, id: &str, mode: HistoryMode) -> Result<(), UnknownPage> {
        let Some(next) = self.registry.position(id) else {
            console_log!("router: no page `{id}`, staying on `{}`", self.current_page());
            return Err(UnknownPage(id.to_owned()));
        };
        self.show(next, mode);
        Ok(())
    }

    /// Re-derives the page from the address bar after back/forward, resolving
    /// it exactly like startup does: a missing or unregistered fragment means
    /// the default page.
    pub fn sync_from_address_bar(&mut self) {
        let next = resolve_fragment(&self.registry, &self.browser, self.default_page);
        self.show(next, HistoryMode::Skip);
    }

    fn show(&mut self, next: usize, mode: HistoryMode) {
        self.registry.container_at(self.current).set_on(false);
        self.registry.container_at(next).set_on(true);
        self.current = next;

        let page = self.registry.id_at(next);
        self.browser.scroll_to_top();
        if mode == HistoryMode::Push {
            self.browser.push_fragment(page);
        }
        for listener in &mut self.listeners {
            listener(page);
        }
    }
}

/// Position of the page named in the address bar, or `default_idx` when the
/// fragment is missing or names no registered page.
fn resolve_fragment<C, B: Browser>(registry: &PageRegistry<C>, browser: &B, default_idx: usize) -> usize {
    browser
        .fragment()
        .and_then(|f| registry.position(&f))
        .unwrap_or(default_idx)
}

/// Shared handle to the one router instance, cloned into event closures.
pub struct RouterHandle<C, B>(Rc<RefCell<Router<C, B>>>);

impl<C, B> Clone for RouterHandle<C, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<C: Toggle, B: Browser> RouterHandle<C, B> {
    pub fn new(router: Router<C, B>) -> Self {
        Self(Rc::new(RefCell::new(router)))
    }

    /// Returns whether the page changed. A call made while the router is busy
    /// (from inside a page-change listener) is dropped.
    pub fn navigate(&self, id: &str, mode: HistoryMode) -> bool {
        match self.0.try_borrow_mut() {
            Ok(mut router) => router.switch_to(id, mode).is_ok(),
            Err(_) => {
                console_warn!("router: re-entrant navigation to `{id}` dropped");
                false
            }
        }
    }

    pub fn sync_from_address_bar(&self) -> bool {
        match self.0.try_borrow_mut() {
            Ok(mut router) => {
                router.sync_from_address_bar();
                true
            }
            Err(_) => {
                console_warn!("router: re-entrant history sync dropped");
                false
            }
        }
    }

    /// Returns false, dropping the listener, when called from inside another
    /// page-change listener.
    pub fn subscribe(&self, listener: impl FnMut(&PageId) + 'static) -> bool {
        match self.0.try_borrow_mut() {
            Ok(mut router) => {
                router.subscribe(listener);
                true
            }
            Err(_) => {
                console_warn!("router: re-entrant subscribe dropped");
                false
            }
        }
    }

    pub fn current_page(&self) -> PageId {
        self.0.borrow().current_page().clone()
    }

    /// Runs `f` with shared access to the router.
    pub fn with<R>(&self, f: impl FnOnce(&Router<C, B>) -> R) -> R {
        f(&self.0.borrow())
    }
}
