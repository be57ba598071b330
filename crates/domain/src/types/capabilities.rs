//! Composable entity capabilities
//!
//! Timestamps, slugs and per-locale translations are expressed as small
//! traits that an entity opts into, each backed by plain fields on the entity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::constants::SLUG_SEPARATOR;
use crate::utils::slug::slugify;

/// Entity that records when it was first persisted and last changed
pub trait TimestampedEntity {
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Stamp a save: `created_at` is set once, `updated_at` every time
    fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at().is_none() {
            self.set_created_at(now);
        }
        self.set_updated_at(now);
    }
}

/// Entity with a URL slug derived from some of its fields
pub trait SluggableEntity {
    /// Field values the slug is built from, in order
    fn sluggable_fields(&self) -> Vec<String>;
    fn slug(&self) -> Option<&str>;
    fn set_slug(&mut self, slug: String);

    /// Rebuild the slug from [`sluggable_fields`](Self::sluggable_fields)
    fn generate_slug(&mut self) -> &str {
        let source = self
            .sluggable_fields()
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(&SLUG_SEPARATOR.to_string());
        self.set_slug(slugify(&source));
        self.slug().unwrap_or_default()
    }
}

/// Entity whose text attributes are stored once per locale
///
/// Reads go through [`translate`](Self::translate), which falls back to the
/// default locale when the requested one has no translation yet.
pub trait TranslatableEntity {
    type Translation: Default;

    fn translations(&self) -> &BTreeMap<String, Self::Translation>;
    fn translations_mut(&mut self) -> &mut BTreeMap<String, Self::Translation>;
    fn current_locale(&self) -> Option<&str>;
    fn set_current_locale(&mut self, locale: Option<String>);
    fn default_locale(&self) -> &str;

    /// Translation for `locale` (or the current locale), else the default one
    fn translate(&self, locale: Option<&str>) -> Option<&Self::Translation> {
        let requested = locale.or_else(|| self.current_locale()).unwrap_or(self.default_locale());
        self.translations()
            .get(requested)
            .or_else(|| self.translations().get(self.default_locale()))
    }

    /// Translation for `locale`, created empty if missing
    fn translate_mut(&mut self, locale: &str) -> &mut Self::Translation {
        self.translations_mut().entry(locale.to_string()).or_default()
    }
}
