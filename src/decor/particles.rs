//! Floating background particles: absolutely positioned `div.particle`s whose
//! motion is pure CSS animation. Only placement and timing are random.

use wasm_bindgen::JsValue;
use web_sys::{Document, window};

use super::element;
use crate::config::{ParticleConfig, SiteConfig};

/// Random placement and timing for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    /// Draws four values from `unit` (each in `[0, 1)`).
    pub fn scatter(cfg: &ParticleConfig, mut unit: impl FnMut() -> f64) -> Self {
        Self {
            left_pct: unit() * 100.0,
            top_pct: unit() * 100.0,
            delay_s: unit() * cfg.max_delay_s,
            duration_s: cfg.min_duration_s + unit() * cfg.duration_spread_s,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left:{}%;top:{}%;animation-delay:{}s;animation-duration:{}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Linear congruential generator over `u32` (not crypto secure, placement only).
pub struct UnitRng {
    state: u32,
}

impl UnitRng {
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeded from the browser RNG when the `rng` feature is on, else from the
    /// performance clock.
    pub fn from_browser() -> Self {
        Self::from_seed(browser_seed())
    }

    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state as f64 / (u32::MAX as f64 + 1.0)
    }
}

#[cfg(feature = "rng")]
fn browser_seed() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(_) => clock_seed(),
    }
}

#[cfg(not(feature = "rng"))]
fn browser_seed() -> u32 {
    clock_seed()
}

fn clock_seed() -> u32 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0) as u32
}

pub(crate) fn install(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(bg) = element(doc, &config.elements.background, "particles") else {
        return Ok(());
    };
    let mut rng = UnitRng::from_browser();
    for _ in 0..config.particles.count {
        let particle = Particle::scatter(&config.particles, || rng.next_unit());
        let el = doc.create_element("div")?;
        el.set_class_name("particle");
        el.set_attribute("style", &particle.style())?;
        bg.append_child(&el)?;
    }
    Ok(())
}
