use askama::Template;

use super::PageContext;

/// One button of the version or style picker.
pub struct Tab {
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub source: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_ready: bool,
    pub variant_tabs: Vec<Tab>,
    pub style_tabs: Vec<Tab>,
    /// Pre-rendered layout fragment for the selected variant and style.
    pub slide_html: String,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
}
