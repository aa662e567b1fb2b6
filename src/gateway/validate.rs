use serde_json::Value;

use super::{GenerationError, GenerationErrorKind};
use crate::models::slide::{
    GenerationResult, POINTS_PER_VARIANT, SlidePoint, SlideVariant, VARIANT_COUNT,
};

/// Parse and validate a raw backend payload into a `GenerationResult`.
///
/// Unparseable text is `MalformedResponse`; anything that parses but breaks the
/// 3-variant contract is `InvalidShape`. Order is preserved exactly.
pub fn parse_payload(raw: &str) -> Result<GenerationResult, GenerationError> {
    let body = strip_code_fence(raw);

    let data: Value = serde_json::from_str(body).map_err(|e| {
        GenerationError::new(
            GenerationErrorKind::MalformedResponse,
            format!("response is not valid JSON: {e}"),
        )
    })?;

    let Value::Array(versions) = data else {
        return Err(invalid_shape("response is not an array of slide versions"));
    };
    if versions.len() != VARIANT_COUNT {
        return Err(invalid_shape(format!(
            "expected {VARIANT_COUNT} slide versions, got {}",
            versions.len()
        )));
    }

    let mut variants: Vec<SlideVariant> = Vec::with_capacity(VARIANT_COUNT);
    for (i, version) in versions.into_iter().enumerate() {
        let Value::Array(items) = version else {
            return Err(invalid_shape(format!("slide version {} is not an array", i + 1)));
        };
        if items.is_empty() {
            return Err(invalid_shape(format!("slide version {} has no points", i + 1)));
        }
        if items.len() != POINTS_PER_VARIANT {
            log::warn!(
                "slide version {} has {} points instead of {POINTS_PER_VARIANT}",
                i + 1,
                items.len()
            );
        }

        let mut points = Vec::with_capacity(items.len());
        for (j, item) in items.into_iter().enumerate() {
            let point: SlidePoint = serde_json::from_value(item).map_err(|e| {
                invalid_shape(format!("point {} of version {}: {e}", j + 1, i + 1))
            })?;
            if point.title.trim().is_empty() || point.description.trim().is_empty() {
                return Err(invalid_shape(format!(
                    "point {} of version {} has an empty title or description",
                    j + 1,
                    i + 1
                )));
            }
            points.push(point);
        }
        variants.push(points);
    }

    GenerationResult::from_variants(variants).map_err(invalid_shape)
}

fn invalid_shape(message: impl Into<String>) -> GenerationError {
    GenerationError::new(GenerationErrorKind::InvalidShape, message)
}

/// Drop surrounding whitespace and a wrapping markdown code fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
