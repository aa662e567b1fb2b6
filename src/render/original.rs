use askama::Template;

use super::{Layout, RenderedPoint, cycle};
use crate::models::slide::{SlideStyle, SlideVariant};
use crate::templates_structs::OriginalLayoutTemplate;

const SCHEMES: [&str; 6] = [
    "scheme-green",
    "scheme-blue",
    "scheme-pink",
    "scheme-yellow",
    "scheme-purple",
    "scheme-cyan",
];

/// Icon beside a card, alternating sides by index parity.
pub struct OriginalLayout;

impl Layout for OriginalLayout {
    fn style(&self) -> SlideStyle {
        SlideStyle::Original
    }

    fn arrange(&self, variant: &SlideVariant) -> Vec<RenderedPoint> {
        variant
            .iter()
            .enumerate()
            .map(|(i, point)| RenderedPoint {
                badge: format!("{:02}. {}", i + 1, point.title),
                tone: cycle(&SCHEMES, i),
                modifier: if i % 2 == 0 { "place-left" } else { "place-right" },
                ..RenderedPoint::base(i, point)
            })
            .collect()
    }

    fn render_html(&self, variant: &SlideVariant) -> Result<String, askama::Error> {
        OriginalLayoutTemplate { points: self.arrange(variant) }.render()
    }
}
