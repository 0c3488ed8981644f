use std::path::{Path, PathBuf};

use blog_core::BlogCore;
use salvo::prelude::*;
use tera::Tera;

use crate::error::WebError;

/// Shared per-request state, injected into the depot by `affix_state`.
#[derive(Clone)]
pub struct AppState {
    pub core: BlogCore,
    pub templates: Tera,
}

impl AppState {
    pub fn new(core: BlogCore) -> Result<Self, tera::Error> {
        let templates_dir = core
            .config
            .templates_dir
            .clone()
            .unwrap_or_else(bundled_templates_dir);
        let templates = load_templates(&templates_dir)?;
        Ok(Self { core, templates })
    }

    pub fn from_depot(depot: &Depot) -> Result<&Self, WebError> {
        depot.obtain::<AppState>().map_err(|_| WebError::MissingState)
    }

    pub fn render(&self, template: &str, ctx: &tera::Context) -> Result<Text<String>, WebError> {
        let body = self.templates.render(template, ctx)?;
        Ok(Text::Html(body))
    }
}

pub fn bundled_templates_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

pub fn load_templates(dir: &Path) -> Result<Tera, tera::Error> {
    let glob = format!("{}/**/*.html", dir.display());
    let templates = Tera::new(&glob)?;
    tracing::debug!(
        count = templates.get_template_names().count(),
        %glob,
        "loaded templates"
    );
    Ok(templates)
}
