//! Layout strategies for a slide variant.
//!
//! Every layout keeps all points in input order; they differ only in the
//! decorations attached to each point. Palette choices cycle over the point
//! index so the same input always renders the same way.

mod original;
mod process;
mod sketch;

pub use original::OriginalLayout;
pub use process::ProcessLayout;
pub use sketch::SketchLayout;

use crate::models::slide::{SlidePoint, SlideStyle, SlideVariant};

/// A point placed by a layout, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPoint {
    /// 0-based position in the variant.
    pub position: usize,
    pub title: String,
    pub description: String,
    /// Icon tag after fallback, used as a CSS hook.
    pub icon_tag: &'static str,
    pub glyph: &'static str,
    /// Layout-specific label (numbered title, step number, or empty).
    pub badge: String,
    /// Colour scheme class.
    pub tone: &'static str,
    /// Placement or rotation class.
    pub modifier: &'static str,
}

impl RenderedPoint {
    fn base(position: usize, point: &SlidePoint) -> Self {
        Self {
            position,
            title: point.title.clone(),
            description: point.description.clone(),
            icon_tag: point.icon.as_str(),
            glyph: point.icon.glyph(),
            badge: String::new(),
            tone: "",
            modifier: "",
        }
    }
}

pub trait Layout: Sync {
    fn style(&self) -> SlideStyle;

    /// Place every point of `variant`, one output per input, same order.
    fn arrange(&self, variant: &SlideVariant) -> Vec<RenderedPoint>;

    /// Render the arranged points to an HTML fragment.
    fn render_html(&self, variant: &SlideVariant) -> Result<String, askama::Error>;
}

impl SlideStyle {
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            SlideStyle::Original => &OriginalLayout,
            SlideStyle::Process => &ProcessLayout,
            SlideStyle::Sketch => &SketchLayout,
        }
    }
}

/// Pick a palette entry for `position`, cycling over the palette length.
fn cycle<T: Copy>(palette: &[T], position: usize) -> T {
    palette[position % palette.len()]
}
