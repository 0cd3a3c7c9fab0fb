use crate::core::content::Skill;
use crate::core::scene::TagScreen;
use crate::dom::{self, set_style};
use web_sys as web;

/// One absolutely positioned label per skill, placed from the projected
/// tag cloud each frame.
pub struct TagLabels {
    labels: Vec<web::HtmlElement>,
    last: Vec<TagScreen>,
}

fn rounded(s: &TagScreen) -> (i32, i32, i32, i32, bool) {
    (
        s.x.round() as i32,
        s.y.round() as i32,
        (s.scale * 100.0).round() as i32,
        (s.opacity * 100.0).round() as i32,
        s.visible,
    )
}

impl TagLabels {
    /// Fill `layer` with labels for `skills`, replacing anything already there.
    pub fn new(
        document: &web::Document,
        layer: &web::HtmlElement,
        skills: &[Skill],
    ) -> anyhow::Result<Self> {
        layer.set_inner_html("");
        let mut labels = Vec::with_capacity(skills.len());
        for skill in skills {
            let el = dom::create_element(document, "span", "tunnel-tag")?;
            el.set_text_content(Some(skill.name));
            _ = el.set_attribute("data-category", skill.category.as_str());
            set_style(&el, "position", "absolute");
            set_style(&el, "left", "0");
            set_style(&el, "top", "0");
            set_style(&el, "visibility", "hidden");
            _ = layer.append_child(&el);
            labels.push(el);
        }
        Ok(Self {
            last: vec![TagScreen::HIDDEN; labels.len()],
            labels,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn apply(&mut self, screens: impl Iterator<Item = TagScreen>) {
        for ((el, last), s) in self.labels.iter().zip(self.last.iter_mut()).zip(screens) {
            if rounded(last) == rounded(&s) {
                continue;
            }
            if s.visible != last.visible {
                set_style(el, "visibility", if s.visible { "visible" } else { "hidden" });
            }
            if s.visible {
                set_style(
                    el,
                    "transform",
                    &format!(
                        "translate({:.0}px, {:.0}px) translate(-50%, -50%) scale({:.2})",
                        s.x, s.y, s.scale
                    ),
                );
                set_style(el, "opacity", &format!("{:.2}", s.opacity));
            }
            *last = s;
        }
    }
}
