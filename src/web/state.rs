use crate::store::Store;
use crate::Config;
use anyhow::Result;
use tera::Tera;

pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub templates: Tera,
}

impl AppState {
    /// Builds the shared state once at startup. Templates are embedded at
    /// compile time; the whole state stays immutable behind an Arc from
    /// here on.
    pub fn new(config: Config, store: Store) -> Result<Self> {
        let mut templates = Tera::default();

        templates.add_raw_templates(vec![
            ("css/style.css", include_str!("../../templates/css/style.css")),
            ("base.html", include_str!("../../templates/base.html")),
            ("index.html", include_str!("../../templates/index.html")),
            ("page.html", include_str!("../../templates/page.html")),
            ("404.html", include_str!("../../templates/404.html")),
        ])?;

        Ok(Self {
            config,
            store,
            templates,
        })
    }
}
