//! Handlebars setup and the context every page is rendered with.

use axum::{http::StatusCode, response::Html};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::borrow::Cow;
use tracing::error;

#[derive(Serialize)]
pub struct TemplateContext<'a, T>
where
    T: Serialize,
{
    pub template: &'static str,
    pub title: Cow<'a, str>,
    pub body: T,
}

impl<T> TemplateContext<'_, T>
where
    T: Serialize,
{
    pub fn to_html(&self, hbs: &Handlebars<'_>) -> Result<String, RenderError> {
        hbs.render(self.template, self)
    }

    pub fn render(self, hbs: &Handlebars<'_>) -> Result<Html<String>, StatusCode> {
        self.to_html(hbs).map(Html).map_err(|err| {
            error!("Failed to render template {}: {err}", self.template);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

struct Partial {
    name: &'static str,
    content: &'static str,
}

macro_rules! partial {
    ($name:expr) => {
        Partial {
            name: $name,
            content: include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/",
                $name,
                ".html.hbs"
            )),
        }
    };
}

// Each partial is templates/NAME.html.hbs, with its view in src/templates/.
static PARTIALS: [Partial; 5] = [
    partial!("district"),
    partial!("header"),
    partial!("index"),
    partial!("map"),
    partial!("search_form"),
];

pub fn handlebars_init() -> Result<Handlebars<'static>, TemplateError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    for partial in PARTIALS.iter() {
        hbs.register_template_string(partial.name, partial.content)?;
    }
    Ok(hbs)
}

#[test]
fn all_partials_compile() {
    let hbs = handlebars_init().unwrap();
    for partial in PARTIALS.iter() {
        assert!(hbs.has_template(partial.name), "{} missing", partial.name);
    }
}
