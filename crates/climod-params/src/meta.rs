//! Application-level metadata consumed by the manifest and help renderers

/// Descriptive fields of the application itself.
///
/// Only the manifest generator and the synopsis renderer read these;
/// empty fields are skipped on output.
#[derive(Debug, Clone, Default)]
pub struct AppMeta {
    pub title: String,
    pub description: String,
    pub category: String,
    pub version: String,
    pub documentation_url: String,
    pub license: String,
    pub contributor: String,
    pub acknowledgements: String,
}

impl AppMeta {
    pub fn new(title: &str, description: &str) -> Self {
        AppMeta {
            title: title.to_string(),
            description: description.to_string(),
            ..AppMeta::default()
        }
    }

    /// Fields in the fixed order the manifest schema requires.
    pub fn manifest_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("category", &self.category),
            ("title", &self.title),
            ("description", &self.description),
            ("version", &self.version),
            ("documentation-url", &self.documentation_url),
            ("license", &self.license),
            ("contributor", &self.contributor),
            ("acknowledgements", &self.acknowledgements),
        ]
    }
}
