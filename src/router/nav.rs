//! Navigation controls: classifying link targets and keeping the active marker
//! on the control that points at the current page.

use super::{PageId, Toggle};

/// What a click on a link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// `#id` link: handled in-app, default navigation suppressed.
    Page(String),
    /// Bare `#`, empty or non-fragment href: left to the browser.
    PassThrough,
}

impl NavTarget {
    pub fn classify(href: &str) -> Self {
        match fragment_id(href) {
            Some(id) => NavTarget::Page(id.to_owned()),
            None => NavTarget::PassThrough,
        }
    }
}

/// Extracts the page id from a `#id` string. `None` for anything that is not a
/// non-empty fragment.
pub fn fragment_id(hash: &str) -> Option<&str> {
    hash.trim().strip_prefix('#').filter(|id| !id.is_empty())
}

/// Marks exactly the controls whose target equals the current page.
pub struct NavHighlighter<T> {
    links: Vec<(String, T)>,
}

impl<T: Toggle> NavHighlighter<T> {
    pub fn new(links: Vec<(String, T)>) -> Self {
        Self { links }
    }

    pub fn refresh(&self, current: &PageId) {
        for (target, control) in &self.links {
            control.set_on(target == current.as_str());
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryToggle;

    #[test]
    fn classify_fragments() {
        assert_eq!(NavTarget::classify("#about"), NavTarget::Page("about".into()));
        assert_eq!(NavTarget::classify(" #skills "), NavTarget::Page("skills".into()));
        assert_eq!(NavTarget::classify("#"), NavTarget::PassThrough);
        assert_eq!(NavTarget::classify(""), NavTarget::PassThrough);
        assert_eq!(NavTarget::classify("https://github.com/"), NavTarget::PassThrough);
        assert_eq!(NavTarget::classify("resume.pdf"), NavTarget::PassThrough);
    }

    #[test]
    fn refresh_marks_only_matching_control() {
        let home = MemoryToggle::default();
        let about = MemoryToggle::default();
        let hl = NavHighlighter::new(vec![
            ("home".to_owned(), home.clone()),
            ("about".to_owned(), about.clone()),
        ]);
        hl.refresh(&PageId::new("about"));
        assert!(!home.is_on());
        assert!(about.is_on());
        hl.refresh(&PageId::new("home"));
        assert!(home.is_on());
        assert!(!about.is_on());
    }
}
