use askama::Template;

use crate::render::RenderedPoint;

#[derive(Template)]
#[template(path = "layouts/original.html")]
pub struct OriginalLayoutTemplate {
    pub points: Vec<RenderedPoint>,
}

#[derive(Template)]
#[template(path = "layouts/process.html")]
pub struct ProcessLayoutTemplate {
    pub points: Vec<RenderedPoint>,
}

#[derive(Template)]
#[template(path = "layouts/sketch.html")]
pub struct SketchLayoutTemplate {
    pub points: Vec<RenderedPoint>,
}
