use askama::Template;

use super::{Layout, RenderedPoint};
use crate::models::slide::{SlideStyle, SlideVariant};
use crate::templates_structs::ProcessLayoutTemplate;

/// Vertical timeline; each point carries its 1-based step number.
pub struct ProcessLayout;

impl Layout for ProcessLayout {
    fn style(&self) -> SlideStyle {
        SlideStyle::Process
    }

    fn arrange(&self, variant: &SlideVariant) -> Vec<RenderedPoint> {
        variant
            .iter()
            .enumerate()
            .map(|(i, point)| RenderedPoint {
                badge: (i + 1).to_string(),
                tone: "tone-ink",
                modifier: if i + 1 == variant.len() { "step-last" } else { "step" },
                ..RenderedPoint::base(i, point)
            })
            .collect()
    }

    fn render_html(&self, variant: &SlideVariant) -> Result<String, askama::Error> {
        ProcessLayoutTemplate { points: self.arrange(variant) }.render()
    }
}
