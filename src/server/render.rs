//! HTML rendering with Tera
//!
//! Templates live in `templates/` and are embedded at compile time, so the
//! binary has no runtime dependency on the working directory.

use crate::core::error::{RenderError, ShopError};
use axum::response::Html;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("landing.html", include_str!("../../templates/landing.html")),
    ("review_form.html", include_str!("../../templates/review_form.html")),
    ("order_form.html", include_str!("../../templates/order_form.html")),
    ("thanks.html", include_str!("../../templates/thanks.html")),
    ("orders_list.html", include_str!("../../templates/orders_list.html")),
    ("order_detail.html", include_str!("../../templates/order_detail.html")),
];

/// Renders the embedded page templates
pub struct Renderer {
    tera: Tera,
    site_name: String,
}

impl Renderer {
    /// Parse all embedded templates
    pub fn new(site_name: impl Into<String>) -> Result<Self, ShopError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(|e| RenderError::Template {
                template: "*".to_string(),
                message: error_chain(&e),
            })?;

        Ok(Self {
            tera,
            site_name: site_name.into(),
        })
    }

    /// A context pre-filled with site-wide values
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site_name", &self.site_name);
        context
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, ShopError> {
        self.tera
            .render(template, context)
            .map(Html)
            .map_err(|e| {
                RenderError::Template {
                    template: template.to_string(),
                    message: error_chain(&e),
                }
                .into()
            })
    }
}

fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
