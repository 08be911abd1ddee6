//! Site configuration.
//!
//! Every field has a default matching the stock portfolio markup, so the host
//! page can call `start_site()` with no argument, or pass a JSON object that
//! overrides only what differs (keys are camelCase).

use serde::Deserialize;

use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Page shown when the address bar names no registered page.
    pub default_page: String,
    /// Selector for page containers; each match's `id` becomes its page id.
    pub page_selector: String,
    /// Selector for the nav controls that get the active class.
    pub nav_selector: String,
    /// Selector for every link routed through the router on click.
    pub link_selector: String,
    /// Class marking both the visible page and the active nav control.
    pub active_class: String,
    pub elements: ElementIds,
    pub particles: ParticleConfig,
    pub skill_web: SkillWebConfig,
    pub reveal: RevealConfig,
    /// Scroll offset in px past which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Text of the badge replacing a profile image that failed to load.
    pub profile_initial: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_page: "home".into(),
            page_selector: ".page".into(),
            nav_selector: ".nav-link".into(),
            link_selector: "a[href^=\"#\"]".into(),
            active_class: "active".into(),
            elements: ElementIds::default(),
            particles: ParticleConfig::default(),
            skill_web: SkillWebConfig::default(),
            reveal: RevealConfig::default(),
            scroll_top_threshold: 300.0,
            profile_initial: "C".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Element ids looked up once at startup by the decorative widgets.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub background: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub scroll_top: String,
    pub profile_img: String,
    pub web_lines: String,
    pub skill_points: String,
    pub skill_labels: String,
    pub skill_area: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            background: "bgAnimation".into(),
            menu_toggle: "menuToggle".into(),
            nav_links: "navLinks".into(),
            scroll_top: "scrollTop".into(),
            profile_img: "profileImg".into(),
            web_lines: "webLines".into(),
            skill_points: "skillPoints".into(),
            skill_labels: "skillLabels".into(),
            skill_area: "skillArea".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: u32,
    pub max_delay_s: f64,
    pub min_duration_s: f64,
    pub duration_spread_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self { count: 50, max_delay_s: 20.0, min_duration_s: 20.0, duration_spread_s: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0..=100.
    pub value: f64,
    /// Clockwise degrees from twelve o'clock.
    pub angle: f64,
}

impl Skill {
    fn new(name: &str, value: f64, angle: f64) -> Self {
        Self { name: name.into(), value, angle }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillWebConfig {
    pub center: f64,
    pub max_radius: f64,
    /// Distance of labels beyond `max_radius`.
    pub label_offset: f64,
    pub point_radius: f64,
    pub hover_point_radius: f64,
    pub skills: Vec<Skill>,
}

impl Default for SkillWebConfig {
    fn default() -> Self {
        Self {
            center: 300.0,
            max_radius: 240.0,
            label_offset: 60.0,
            point_radius: 6.0,
            hover_point_radius: 8.0,
            skills: vec![
                Skill::new("GenAI & LLMs", 95.0, 0.0),
                Skill::new("ML & Deep Learning", 90.0, 60.0),
                Skill::new("Cloud & MLOps", 88.0, 120.0),
                Skill::new("Data Engineering", 85.0, 180.0),
                Skill::new("Analytics", 87.0, 240.0),
                Skill::new("Programming", 93.0, 300.0),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "section".into(),
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".into(),
            class: "visible".into(),
        }
    }
}
