use serde_json::{Value, json};

use crate::models::slide::{IconName, POINTS_PER_VARIANT, VARIANT_COUNT};

/// Build the instruction sent to the backend. `text` is embedded verbatim.
pub fn build_prompt(text: &str, language: &str) -> String {
    let icons = IconName::ALL
        .iter()
        .filter(|icon| **icon != IconName::Default)
        .map(|icon| format!("'{}'", icon.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert in document summarization and presentation design.\n\
         Analyze the following text and produce {VARIANT_COUNT} different versions of a summary slide. \
         Each version must contain exactly {POINTS_PER_VARIANT} key points or stages. \
         All generated text (titles and descriptions) must be written in {language}.\n\
         \n\
         - Version 1: a direct, step-by-step summary of the main process.\n\
         - Version 2: a summary focused on the most impactful results, benefits or conclusions in the text.\n\
         - Version 3: a more creative or metaphorical reading of the key concepts, suited to a high-level overview.\n\
         \n\
         For every point of every version give a short, catchy title and a concise description (1-2 sentences).\n\
         Also choose the most suitable icon from this list: {icons}. If none fits, use 'default'.\n\
         \n\
         Return your answer as a valid JSON array holding {VARIANT_COUNT} nested arrays (one per version), \
         following the provided schema. Do not include any other text, explanations or markdown.\n\
         \n\
         Here is the text to analyze:\n\
         ---\n\
         {text}\n\
         ---\n"
    )
}

/// Structured-output schema: 3 arrays of 6 `{title, description, icon}` objects.
pub fn response_schema() -> Value {
    let icon_tags: Vec<&str> = IconName::ALL.iter().map(|icon| icon.as_str()).collect();

    json!({
        "type": "ARRAY",
        "description": "An array holding exactly three different versions of the slide.",
        "minItems": VARIANT_COUNT,
        "maxItems": VARIANT_COUNT,
        "items": {
            "type": "ARRAY",
            "description": "The key points of a single slide version.",
            "minItems": POINTS_PER_VARIANT,
            "maxItems": POINTS_PER_VARIANT,
            "items": {
                "type": "OBJECT",
                "properties": {
                    "title": {
                        "type": "STRING",
                        "description": "A short, catchy title for the key point."
                    },
                    "description": {
                        "type": "STRING",
                        "description": "A concise summary of the key point (1-2 sentences)."
                    },
                    "icon": {
                        "type": "STRING",
                        "format": "enum",
                        "enum": icon_tags,
                        "description": "The most suitable icon name from the list."
                    }
                },
                "required": ["title", "description", "icon"],
                "propertyOrdering": ["title", "description", "icon"]
            }
        }
    })
}
