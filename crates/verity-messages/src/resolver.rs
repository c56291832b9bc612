//! # Message Template Resolution
//!
//! Maps an error-message identifier and an optional locale to display
//! text. [`MessageTemplateResolver`] is the strategy seam: deployments
//! inject [`TableResolver`] (or their own implementation) where real
//! translations exist, and [`IdentityResolver`] keeps the rest of the
//! system total with zero configuration.
//!
//! ## Totality
//!
//! `resolve` always returns a string. The worst case — an unknown id under
//! an unknown locale — returns the identifier itself, which is why message
//! identifiers double as templates in unconfigured deployments.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TemplateLoadError;

/// Strategy for turning a message identifier into a display template.
pub trait MessageTemplateResolver {
    /// The template for `id` under `locale`. Total: always a string,
    /// falling back to `id` itself when nothing richer is known.
    fn resolve(&self, id: &str, locale: Option<&str>) -> String;
}

/// Null-object resolver: the identifier is the template.
///
/// Ignores the locale entirely, including identifiers that merely look
/// locale-qualified.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl IdentityResolver {
    /// Create the identity resolver.
    pub fn new() -> Self {
        Self
    }
}

impl MessageTemplateResolver for IdentityResolver {
    fn resolve(&self, id: &str, _locale: Option<&str>) -> String {
        id.to_string()
    }
}

/// In-memory, locale-aware template table.
///
/// Lookup order: the requested locale's table, then the locale-independent
/// table, then the identifier itself. Holds no mutable state after
/// construction and is safe to share across threads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableResolver {
    /// Locale-independent templates by message id.
    #[serde(default)]
    templates: BTreeMap<String, String>,
    /// Per-locale template overrides by message id.
    #[serde(default)]
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl TableResolver {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale-independent template.
    pub fn with_template(mut self, id: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(id.into(), template.into());
        self
    }

    /// Add a template for a specific locale.
    pub fn with_locale_template(
        mut self,
        locale: impl Into<String>,
        id: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(id.into(), template.into());
        self
    }

    /// Load a table from a JSON file of the shape
    /// `{ "templates": {..}, "locales": { "de-DE": {..} } }`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateLoadError::Io`] when the file cannot be read and
    /// [`TemplateLoadError::Parse`] when it does not decode.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TemplateLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table: Self =
            serde_json::from_str(&content).map_err(|err| TemplateLoadError::Parse {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        debug!(
            path = %path.display(),
            templates = table.templates.len(),
            locales = table.locales.len(),
            "loaded message template table"
        );
        Ok(table)
    }

    /// Number of locale-independent templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the table holds no templates at all.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.locales.is_empty()
    }
}

impl MessageTemplateResolver for TableResolver {
    fn resolve(&self, id: &str, locale: Option<&str>) -> String {
        if let Some(locale) = locale {
            if let Some(template) = self.locales.get(locale).and_then(|table| table.get(id)) {
                return template.clone();
            }
        }
        self.templates
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_the_id_unchanged() {
        let resolver = IdentityResolver::new();
        assert_eq!(
            resolver.resolve("user.email.invalid", None),
            "user.email.invalid"
        );
    }

    #[test]
    fn identity_ignores_the_locale_entirely() {
        let resolver = IdentityResolver::new();
        assert_eq!(
            resolver.resolve("user.email.invalid", Some("de-DE")),
            "user.email.invalid"
        );
        // Locale-like substrings in the id change nothing.
        assert_eq!(
            resolver.resolve("greeting.en-US.morning", Some("fr-FR")),
            "greeting.en-US.morning"
        );
    }

    #[test]
    fn table_prefers_the_requested_locale() {
        let resolver = TableResolver::new()
            .with_template("user.email.invalid", "Email address is invalid.")
            .with_locale_template("de-DE", "user.email.invalid", "E-Mail-Adresse ist ungültig.");

        assert_eq!(
            resolver.resolve("user.email.invalid", Some("de-DE")),
            "E-Mail-Adresse ist ungültig."
        );
        assert_eq!(
            resolver.resolve("user.email.invalid", None),
            "Email address is invalid."
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_the_default_table() {
        let resolver = TableResolver::new().with_template("user.email.invalid", "Invalid email.");
        assert_eq!(
            resolver.resolve("user.email.invalid", Some("fr-FR")),
            "Invalid email."
        );
    }

    #[test]
    fn unknown_id_falls_back_to_the_id_itself() {
        let resolver = TableResolver::new().with_template("known", "Known template.");
        assert_eq!(resolver.resolve("unknown.id", Some("de-DE")), "unknown.id");
    }

    #[test]
    fn empty_table_behaves_like_the_identity_resolver() {
        let resolver = TableResolver::new();
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve("any.id", None), "any.id");
    }

    #[test]
    fn loads_a_table_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(
            &path,
            r#"{
                "templates": { "user.email.invalid": "Email address is invalid." },
                "locales": {
                    "de-DE": { "user.email.invalid": "E-Mail-Adresse ist ungültig." }
                }
            }"#,
        )
        .unwrap();

        let resolver = TableResolver::from_json_file(&path).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(
            resolver.resolve("user.email.invalid", Some("de-DE")),
            "E-Mail-Adresse ist ungültig."
        );
    }

    #[test]
    fn unparsable_table_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "not json").unwrap();

        let err = TableResolver::from_json_file(&path).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Parse { .. }));
    }

    #[test]
    fn missing_table_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableResolver::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Io(_)));
    }
}
