// Host-side integration tests for the page router.
// Everything here goes through the public API with the in-memory browser, so
// no wasm runtime is needed.

use std::cell::RefCell;
use std::rc::Rc;

use folio_router::router::{Browser, MemoryBrowser, MemoryToggle, NavHighlighter, NavTarget};
use folio_router::{HistoryMode, PageId, PageRegistry, Router, RouterHandle, UnknownPage};

struct Fixture {
    router: Router<MemoryToggle, MemoryBrowser>,
    pages: Vec<(String, MemoryToggle)>,
    nav: Vec<(String, MemoryToggle)>,
}

impl Fixture {
    fn new(ids: &[&str], default: &str, hash: &str) -> Self {
        let pages: Vec<(String, MemoryToggle)> =
            ids.iter().map(|id| (id.to_string(), MemoryToggle::default())).collect();
        let nav: Vec<(String, MemoryToggle)> =
            ids.iter().map(|id| (id.to_string(), MemoryToggle::default())).collect();
        let registry = PageRegistry::new(pages.clone()).expect("valid registry");
        let mut router =
            Router::start(registry, MemoryBrowser::with_fragment(hash), default).expect("default registered");
        let highlighter = NavHighlighter::new(nav.clone());
        router.subscribe(move |page| highlighter.refresh(page));
        Self { router, pages, nav }
    }

    fn visible(&self) -> Vec<&str> {
        on(&self.pages)
    }

    fn active_nav(&self) -> Vec<&str> {
        on(&self.nav)
    }
}

fn on(toggles: &[(String, MemoryToggle)]) -> Vec<&str> {
    toggles.iter().filter(|(_, t)| t.is_on()).map(|(id, _)| id.as_str()).collect()
}

#[test]
fn every_registered_page_becomes_the_only_visible_one() {
    let ids = ["home", "about", "skills", "projects", "contact"];
    let mut fx = Fixture::new(&ids, "home", "");
    for id in ids.iter().rev().chain(ids.iter()) {
        fx.router.switch_to(id, HistoryMode::Push).unwrap();
        assert_eq!(fx.visible(), [*id]);
        assert_eq!(fx.active_nav(), [*id]);
        assert_eq!(fx.router.current_page(), id);
    }
}

#[test]
fn unregistered_ids_leave_state_unchanged() {
    let mut fx = Fixture::new(&["home", "about"], "home", "");
    fx.router.switch_to("about", HistoryMode::Push).unwrap();
    for bogus in ["projects", "", "#about", "About", "about "] {
        assert_eq!(
            fx.router.switch_to(bogus, HistoryMode::Push),
            Err(UnknownPage(bogus.to_string()))
        );
        assert_eq!(fx.router.current_page(), &"about");
        assert_eq!(fx.visible(), ["about"]);
        assert_eq!(fx.active_nav(), ["about"]);
    }
    assert_eq!(fx.router.browser().history_len(), 2);
}

#[test]
fn switching_twice_matches_switching_once() {
    let mut fx = Fixture::new(&["home", "about", "skills"], "home", "");
    fx.router.switch_to("skills", HistoryMode::Push).unwrap();
    let once = (fx.visible().join(","), fx.active_nav().join(","), fx.router.current_page().clone());
    fx.router.switch_to("skills", HistoryMode::Push).unwrap();
    let twice = (fx.visible().join(","), fx.active_nav().join(","), fx.router.current_page().clone());
    assert_eq!(once, twice);
}

#[test]
fn pushed_page_reads_back_from_fragment() {
    let mut fx = Fixture::new(&["home", "about", "skills"], "home", "");
    for id in ["about", "skills", "home"] {
        fx.router.switch_to(id, HistoryMode::Push).unwrap();
        assert_eq!(fx.router.browser().fragment().as_deref(), Some(id));
    }
}

#[test]
fn two_backs_from_c_land_on_a() {
    let mut fx = Fixture::new(&["a", "b", "c"], "a", "");
    for id in ["a", "b", "c"] {
        fx.router.switch_to(id, HistoryMode::Push).unwrap();
    }
    for _ in 0..2 {
        assert!(fx.router.browser_mut().back());
        fx.router.sync_from_address_bar();
    }
    assert_eq!(fx.router.current_page(), &"a");
    assert_eq!(fx.visible(), ["a"]);
    // Back/forward never adds entries.
    assert_eq!(fx.router.browser().history_len(), 4);

    assert!(fx.router.browser_mut().forward());
    fx.router.sync_from_address_bar();
    assert_eq!(fx.router.current_page(), &"b");
    assert_eq!(fx.router.browser().history_len(), 4);
}

#[test]
fn back_to_an_unknown_load_fragment_shows_the_default() {
    let mut fx = Fixture::new(&["home", "about"], "home", "#nowhere");
    assert_eq!(fx.router.current_page(), &"home");
    fx.router.switch_to("about", HistoryMode::Push).unwrap();
    assert!(fx.router.browser_mut().back());
    fx.router.sync_from_address_bar();
    assert_eq!(fx.router.current_page(), &"home");
    assert_eq!(fx.visible(), ["home"]);
    assert_eq!(fx.active_nav(), ["home"]);

    assert!(fx.router.browser_mut().forward());
    fx.router.sync_from_address_bar();
    assert_eq!(fx.router.current_page(), &"about");
}

#[test]
fn load_with_skills_fragment() {
    let fx = Fixture::new(&["home", "about", "skills"], "home", "#skills");
    assert_eq!(fx.router.current_page(), &"skills");
    assert_eq!(fx.visible(), ["skills"]);
    assert_eq!(fx.active_nav(), ["skills"]);
}

#[test]
fn unknown_projects_keeps_home_and_fragment() {
    let mut fx = Fixture::new(&["home", "about"], "home", "");
    let before = fx.router.browser().fragment();
    assert!(fx.router.switch_to("projects", HistoryMode::Push).is_err());
    assert_eq!(fx.router.current_page(), &"home");
    assert_eq!(fx.router.browser().fragment(), before);
    assert_eq!(fx.router.browser().history_len(), 1);
}

#[test]
fn clicked_links_route_through_the_handle() {
    let pages: Vec<(&str, MemoryToggle)> =
        ["home", "about"].iter().map(|id| (*id, MemoryToggle::default())).collect();
    let registry = PageRegistry::new(pages).unwrap();
    let handle = RouterHandle::new(Router::start(registry, MemoryBrowser::new(), "home").unwrap());

    let changes = Rc::new(RefCell::new(Vec::<PageId>::new()));
    let sink = changes.clone();
    assert!(handle.subscribe(move |p| sink.borrow_mut().push(p.clone())));

    let click = |href: &str| match NavTarget::classify(href) {
        NavTarget::Page(id) => Some(handle.navigate(&id, HistoryMode::Push)),
        NavTarget::PassThrough => None,
    };
    assert_eq!(click("#about"), Some(true));
    assert_eq!(click("#stale"), Some(false));
    assert_eq!(click("https://example.com/cv.pdf"), None);
    assert_eq!(click("#"), None);

    assert_eq!(handle.current_page(), PageId::new("about"));
    assert_eq!(*changes.borrow(), [PageId::new("home"), PageId::new("about")]);
    assert_eq!(handle.with(|r| r.browser().history_len()), 2);
}
