//! Render options.

use crate::Locale;
use derive_getters::Getters;

/// Inputs to [`render`](crate::render) besides the graph itself.
///
/// The renderer never reads the clock. Callers pass the stamp to use when the
/// quest carries no explicit `version_stamp`.
///
/// # Examples
///
/// ```
/// use questsmith_render::{Locale, RenderOptionsBuilder};
///
/// let options = RenderOptionsBuilder::default()
///     .include_scripting(false)
///     .fallback_stamp("2024-05-01 09:30")
///     .locale(Locale::German)
///     .build()
///     .unwrap();
///
/// assert!(!options.include_scripting());
/// assert_eq!(options.fallback_stamp(), "2024-05-01 09:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RenderOptions {
    /// Embed the scroll-and-highlight script
    #[builder(default = "true")]
    #[getter(skip)]
    include_scripting: bool,
    /// Footer stamp used when the metadata has none
    #[builder(default)]
    fallback_stamp: String,
    /// Label language
    #[builder(default)]
    #[getter(skip)]
    locale: Locale,
}

impl RenderOptions {
    /// Whether the document embeds the navigation script.
    pub fn include_scripting(&self) -> bool {
        self.include_scripting
    }

    /// Label language.
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_scripting: true,
            fallback_stamp: String::new(),
            locale: Locale::default(),
        }
    }
}
