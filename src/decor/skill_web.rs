//! Skill radar chart: one spoke per skill, a point at the skill's value along
//! its spoke, a filled polygon through the points and an HTML label past the
//! spoke's end. Hovering a point highlights its label and vice versa.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, SvgElement};

use super::element;
use crate::config::{SiteConfig, SkillWebConfig};
use crate::dom::listen;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Where one skill's pieces go, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillGeometry {
    pub spoke_end: (f64, f64),
    pub point: (f64, f64),
    pub label: (f64, f64),
}

fn polar(cfg: &SkillWebConfig, angle_deg: f64, radius: f64) -> (f64, f64) {
    // Zero degrees points straight up.
    let rad = (angle_deg - 90.0) * (PI / 180.0);
    (cfg.center + radius * rad.cos(), cfg.center + radius * rad.sin())
}

pub fn layout(cfg: &SkillWebConfig) -> Vec<SkillGeometry> {
    cfg.skills
        .iter()
        .map(|skill| {
            let value = skill.value.clamp(0.0, 100.0);
            SkillGeometry {
                spoke_end: polar(cfg, skill.angle, cfg.max_radius),
                point: polar(cfg, skill.angle, value / 100.0 * cfg.max_radius),
                label: polar(cfg, skill.angle, cfg.max_radius + cfg.label_offset),
            }
        })
        .collect()
}

/// SVG `points` attribute for the filled area.
pub fn polygon_points(geometry: &[SkillGeometry]) -> String {
    geometry
        .iter()
        .map(|g| format!("{},{}", g.point.0, g.point.1))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn install(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let ids = &config.elements;
    let (Some(lines), Some(points), Some(labels), Some(area)) = (
        element(doc, &ids.web_lines, "skill web"),
        element(doc, &ids.skill_points, "skill web"),
        element(doc, &ids.skill_labels, "skill web"),
        element(doc, &ids.skill_area, "skill web"),
    ) else {
        return Ok(());
    };

    let cfg = &config.skill_web;
    let geometry = layout(cfg);
    for (skill, geo) in cfg.skills.iter().zip(&geometry) {
        let line = svg(doc, "line")?;
        line.set_attribute("x1", &cfg.center.to_string())?;
        line.set_attribute("y1", &cfg.center.to_string())?;
        line.set_attribute("x2", &geo.spoke_end.0.to_string())?;
        line.set_attribute("y2", &geo.spoke_end.1.to_string())?;
        line.set_attribute("class", "web-line")?;
        lines.append_child(&line)?;

        let circle: SvgElement = svg(doc, "circle")?.dyn_into()?;
        circle.set_attribute("cx", &geo.point.0.to_string())?;
        circle.set_attribute("cy", &geo.point.1.to_string())?;
        circle.set_attribute("r", &cfg.point_radius.to_string())?;
        circle.set_attribute("class", "skill-point")?;
        points.append_child(&circle)?;

        let label: HtmlElement = doc.create_element("div")?.dyn_into()?;
        label.set_class_name("skill-label");
        label.set_text_content(Some(&skill.name));
        let value = doc.create_element("span")?;
        value.set_class_name("skill-label-value");
        value.set_text_content(Some(&format!("{}%", skill.value)));
        label.append_child(&value)?;
        let style = label.style();
        style.set_property("left", &format!("{}px", geo.label.0))?;
        style.set_property("top", &format!("{}px", geo.label.1))?;
        style.set_property("transform", "translate(-50%, -50%)")?;
        labels.append_child(&label)?;

        bind_hover(&circle, &label, cfg)?;
    }

    area.set_attribute("points", &polygon_points(&geometry))?;
    Ok(())
}

fn svg(doc: &Document, tag: &str) -> Result<Element, JsValue> {
    doc.create_element_ns(Some(SVG_NS), tag)
}

fn bind_hover(circle: &SvgElement, label: &HtmlElement, cfg: &SkillWebConfig) -> Result<(), JsValue> {
    {
        let label = label.clone();
        listen(circle, "mouseenter", move |_evt: MouseEvent| {
            let style = label.style();
            let _ = style.set_property("color", "var(--accent-primary)");
            let _ = style.set_property("border-color", "var(--accent-primary)");
            let _ = style.set_property("transform", "translate(-50%, -50%) scale(1.1)");
        })?;
    }
    {
        let label = label.clone();
        listen(circle, "mouseleave", move |_evt: MouseEvent| {
            let style = label.style();
            let _ = style.set_property("color", "var(--text-primary)");
            let _ = style.set_property("border-color", "var(--border-color)");
            let _ = style.set_property("transform", "translate(-50%, -50%)");
        })?;
    }
    {
        let circle = circle.clone();
        let r = cfg.hover_point_radius.to_string();
        listen(label, "mouseenter", move |_evt: MouseEvent| {
            let _ = circle.set_attribute("r", &r);
            let _ = circle.style().set_property("fill", "var(--accent-secondary)");
        })?;
    }
    let circle = circle.clone();
    let r = cfg.point_radius.to_string();
    listen(label, "mouseleave", move |_evt: MouseEvent| {
        let _ = circle.set_attribute("r", &r);
        let _ = circle.style().set_property("fill", "var(--accent-primary)");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Skill;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn zero_degrees_points_up() {
        let cfg = SkillWebConfig::default();
        let geo = layout(&cfg);
        // GenAI & LLMs: 95% at 0 degrees.
        assert!(close(geo[0].spoke_end, (300.0, 60.0)));
        assert!(close(geo[0].point, (300.0, 300.0 - 228.0)));
        assert!(close(geo[0].label, (300.0, 0.0)));
    }

    #[test]
    fn opposite_spoke_points_down() {
        let cfg = SkillWebConfig::default();
        let geo = layout(&cfg);
        // Data Engineering: 85% at 180 degrees.
        assert!(close(geo[3].spoke_end, (300.0, 540.0)));
        assert!(close(geo[3].point, (300.0, 300.0 + 204.0)));
    }

    #[test]
    fn values_are_clamped_to_the_web() {
        let cfg = SkillWebConfig {
            skills: vec![
                Skill { name: "over".into(), value: 150.0, angle: 90.0 },
                Skill { name: "under".into(), value: -5.0, angle: 90.0 },
            ],
            ..SkillWebConfig::default()
        };
        let geo = layout(&cfg);
        assert!(close(geo[0].point, geo[0].spoke_end));
        assert!(close(geo[1].point, (300.0, 300.0)));
    }

    #[test]
    fn polygon_has_one_pair_per_skill() {
        let cfg = SkillWebConfig::default();
        let pts = polygon_points(&layout(&cfg));
        let pairs: Vec<&str> = pts.split(' ').collect();
        assert_eq!(pairs.len(), cfg.skills.len());
        assert!(pairs.iter().all(|p| p.split(',').count() == 2));
    }

    #[test]
    fn empty_web_has_empty_polygon() {
        let cfg = SkillWebConfig { skills: Vec::new(), ..SkillWebConfig::default() };
        assert!(layout(&cfg).is_empty());
        assert_eq!(polygon_points(&[]), "");
    }
}
