// Template context structures for Askama templates.
// Page templates live in `page`, slide layout fragments in `slide`.

use actix_session::Session;

use crate::session::{csrf, take_flash};

mod api;
mod page;
mod slide;

pub use self::api::ApiErrorResponse;
pub use self::page::{IndexTemplate, NotFoundTemplate, Tab};
pub use self::slide::{OriginalLayoutTemplate, ProcessLayoutTemplate, SketchLayoutTemplate};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub tagline: String,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            app_name: "Proceso Creativo".to_string(),
            tagline: "Generador de Diapositivas con IA".to_string(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
