use askama::Template;

use super::{Layout, RenderedPoint, cycle};
use crate::models::slide::{SlideStyle, SlideVariant};
use crate::templates_structs::SketchLayoutTemplate;

const PAPERS: [&str; 6] = [
    "paper-yellow",
    "paper-blue",
    "paper-green",
    "paper-pink",
    "paper-purple",
    "paper-orange",
];

const TILTS: [&str; 2] = ["tilt-1", "tilt-2"];

/// Hand-drawn grid of independent cards.
pub struct SketchLayout;

impl Layout for SketchLayout {
    fn style(&self) -> SlideStyle {
        SlideStyle::Sketch
    }

    fn arrange(&self, variant: &SlideVariant) -> Vec<RenderedPoint> {
        variant
            .iter()
            .enumerate()
            .map(|(i, point)| RenderedPoint {
                tone: cycle(&PAPERS, i),
                modifier: cycle(&TILTS, i),
                ..RenderedPoint::base(i, point)
            })
            .collect()
    }

    fn render_html(&self, variant: &SlideVariant) -> Result<String, askama::Error> {
        SketchLayoutTemplate { points: self.arrange(variant) }.render()
    }
}
