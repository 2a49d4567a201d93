use crate::constants::*;
use crate::core::ease::ScoreAnimator;
use crate::core::skills::Skill;
use crate::frame::{self, RafLoop};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// DOM-side widgets: the readiness gauge (animated percentage text plus an
// SVG arc) and the per-skill score list (animated percentage text plus a bar
// width). Both count up through their own ease-out animator and stop their
// loop at the terminal value.

fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        ACCENT_HEX
    } else if score >= 60 {
        CYAN_HEX
    } else if score >= 40 {
        VIOLET_HEX
    } else {
        ALERT_HEX
    }
}

/// Animate the readiness percentage into `#readiness-value` and the arc
/// offset of `#readiness-arc`.
pub fn mount_readiness(document: &web::Document, percentage: u8) -> Option<RafLoop> {
    let value_el = document.get_element_by_id("readiness-value")?;
    let arc_el = document.get_element_by_id("readiness-arc");
    let circumference = TAU * GAUGE_ARC_RADIUS;
    if let Some(arc) = &arc_el {
        _ = arc.set_attribute("stroke-dasharray", &format!("{circumference}"));
    }

    let animator = ScoreAnimator::new(percentage as f32);
    Some(frame::start_loop(move || {
        let shown = animator.displayed();
        value_el.set_text_content(Some(&format!("{shown}%")));
        if let Some(arc) = &arc_el {
            let offset = circumference - shown as f64 / 100.0 * circumference;
            _ = arc.set_attribute("stroke-dashoffset", &format!("{offset}"));
        }
        !animator.done()
    }))
}

struct ScoreRow {
    value_el: web::Element,
    bar_el: Option<web::HtmlElement>,
    score: u8,
}

/// Animate the score list rows: `#skill-score-{i}` text and `#skill-bar-{i}`
/// width, colored by score band. All rows share one eased progress scalar.
pub fn mount_score_list(document: &web::Document, skills: &[Skill]) -> Option<RafLoop> {
    let rows: Vec<ScoreRow> = skills
        .iter()
        .enumerate()
        .filter_map(|(i, skill)| {
            let value_el = document.get_element_by_id(&format!("skill-score-{i}"))?;
            let bar_el = document
                .get_element_by_id(&format!("skill-bar-{i}"))
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            Some(ScoreRow {
                value_el,
                bar_el,
                score: skill.score,
            })
        })
        .collect();
    if rows.is_empty() {
        return None;
    }

    for row in &rows {
        if let Some(value_el) = row.value_el.dyn_ref::<web::HtmlElement>() {
            _ = value_el
                .style()
                .set_property("color", score_color(row.score));
        }
    }

    let animator = ScoreAnimator::new(1.0);
    Some(frame::start_loop(move || {
        let progress = animator.value();
        for row in &rows {
            let shown = (row.score as f32 * progress).round() as u32;
            row.value_el.set_text_content(Some(&format!("{shown}%")));
            if let Some(bar) = &row.bar_el {
                _ = bar.style().set_property("width", &format!("{shown}%"));
            }
        }
        !animator.done()
    }))
}
