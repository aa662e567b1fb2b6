use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of alternative summaries requested per generation.
pub const VARIANT_COUNT: usize = 3;

/// Number of points requested per summary.
pub const POINTS_PER_VARIANT: usize = 6;

/// Closed set of icon tags a point can carry.
///
/// Deserialization never fails: any tag outside the set becomes `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum IconName {
    Briefing,
    Brainstorm,
    Meeting,
    Marketing,
    Social,
    Results,
    Default,
}

impl IconName {
    pub const ALL: [IconName; 7] = [
        IconName::Briefing,
        IconName::Brainstorm,
        IconName::Meeting,
        IconName::Marketing,
        IconName::Social,
        IconName::Results,
        IconName::Default,
    ];

    /// Map any backend tag onto the closed set, falling back to `Default`.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(IconName::Default)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Briefing => "briefing",
            IconName::Brainstorm => "brainstorm",
            IconName::Meeting => "meeting",
            IconName::Marketing => "marketing",
            IconName::Social => "social",
            IconName::Results => "results",
            IconName::Default => "default",
        }
    }

    /// Glyph drawn in place of the icon artwork.
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Briefing => "📋",
            IconName::Brainstorm => "💡",
            IconName::Meeting => "👥",
            IconName::Marketing => "📣",
            IconName::Social => "💬",
            IconName::Results => "📈",
            IconName::Default => "⭐",
        }
    }
}

impl From<String> for IconName {
    fn from(tag: String) -> Self {
        IconName::from_tag(&tag)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bullet of a generated slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePoint {
    pub title: String,
    pub description: String,
    pub icon: IconName,
}

/// One candidate summary: ordered points, order drives step numbering.
pub type SlideVariant = Vec<SlidePoint>;

/// Exactly three non-empty variants, produced atomically by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SlideVariant>", into = "Vec<SlideVariant>")]
pub struct GenerationResult {
    variants: Vec<SlideVariant>,
}

impl GenerationResult {
    /// Accept the variants only if there are exactly three and none is empty.
    pub fn from_variants(variants: Vec<SlideVariant>) -> Result<Self, String> {
        if variants.len() != VARIANT_COUNT {
            return Err(format!(
                "expected {VARIANT_COUNT} slide versions, got {}",
                variants.len()
            ));
        }
        if let Some(pos) = variants.iter().position(|v| v.is_empty()) {
            return Err(format!("slide version {} has no points", pos + 1));
        }
        Ok(Self { variants })
    }

    pub fn variants(&self) -> &[SlideVariant] {
        &self.variants
    }

    pub fn variant(&self, index: usize) -> Option<&SlideVariant> {
        self.variants.get(index)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl TryFrom<Vec<SlideVariant>> for GenerationResult {
    type Error = String;

    fn try_from(variants: Vec<SlideVariant>) -> Result<Self, Self::Error> {
        GenerationResult::from_variants(variants)
    }
}

impl From<GenerationResult> for Vec<SlideVariant> {
    fn from(result: GenerationResult) -> Self {
        result.variants
    }
}

/// Visual arrangement applied to the selected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideStyle {
    #[default]
    Original,
    Process,
    Sketch,
}

impl SlideStyle {
    /// Display order of the style picker.
    pub const ALL: [SlideStyle; 3] = [SlideStyle::Original, SlideStyle::Process, SlideStyle::Sketch];

    pub fn as_str(self) -> &'static str {
        match self {
            SlideStyle::Original => "original",
            SlideStyle::Process => "process",
            SlideStyle::Sketch => "sketch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlideStyle::Original => "Original",
            SlideStyle::Process => "Proceso",
            SlideStyle::Sketch => "Boceto",
        }
    }
}

impl fmt::Display for SlideStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown slide style: {}", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for SlideStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s.trim())
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}
