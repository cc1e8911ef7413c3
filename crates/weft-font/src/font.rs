#![forbid(unsafe_code)]

//! Typefaces and how they appear in CSS.

use ahash::AHashSet;
use weft_style::classes::name_class;

use crate::adjust::Adjustment;

/// A typeface in a font stack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Font {
    Serif,
    SansSerif,
    Monospace,
    /// A font the platform is expected to provide, by name.
    Typeface(String),
    /// A web font loaded from `url`.
    ImportFont { name: String, url: String },
    /// A font with metric corrections, optionally loaded from `url`.
    FontWith {
        name: String,
        adjustment: Adjustment,
        url: Option<String>,
    },
}

/// Arguments for [`external`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalFont {
    pub name: String,
    pub url: String,
}

/// Arguments for [`with`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomFont {
    pub name: String,
    pub adjustment: Adjustment,
    pub url: Option<String>,
}

impl Font {
    /// The font's contribution to a family class name.
    ///
    /// Named fonts are lower-cased with their words joined by `-`.
    #[must_use]
    pub fn class_fragment(&self) -> String {
        match self {
            Self::Serif => "serif".to_string(),
            Self::SansSerif => "sans-serif".to_string(),
            Self::Monospace => "monospace".to_string(),
            Self::Typeface(name)
            | Self::ImportFont { name, .. }
            | Self::FontWith { name, .. } => name_class(name),
        }
    }

    /// The font as a `font-family` list entry.
    ///
    /// Generic families are bare keywords, named fonts are quoted.
    #[must_use]
    pub fn css_family(&self) -> String {
        match self {
            Self::Serif => "serif".to_string(),
            Self::SansSerif => "sans-serif".to_string(),
            Self::Monospace => "monospace".to_string(),
            Self::Typeface(name)
            | Self::ImportFont { name, .. }
            | Self::FontWith { name, .. } => {
                format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
            }
        }
    }

    /// Display name for named fonts.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Serif | Self::SansSerif | Self::Monospace => None,
            Self::Typeface(name)
            | Self::ImportFont { name, .. }
            | Self::FontWith { name, .. } => Some(name),
        }
    }

    /// The stylesheet URL that must be imported for this font, if any.
    #[must_use]
    pub fn import_url(&self) -> Option<&str> {
        match self {
            Self::ImportFont { url, .. } => Some(url),
            Self::FontWith { url, .. } => url.as_deref(),
            _ => None,
        }
    }

    /// Metric corrections, if the font has them.
    #[must_use]
    pub fn adjustment(&self) -> Option<&Adjustment> {
        match self {
            Self::FontWith { adjustment, .. } => Some(adjustment),
            _ => None,
        }
    }
}

/// A font the platform provides, by name.
#[must_use]
pub fn typeface(name: impl Into<String>) -> Font {
    Font::Typeface(name.into())
}

#[must_use]
pub fn serif() -> Font {
    Font::Serif
}

#[must_use]
pub fn sans_serif() -> Font {
    Font::SansSerif
}

#[must_use]
pub fn monospace() -> Font {
    Font::Monospace
}

/// A web font loaded from a stylesheet URL.
///
/// ```
/// use weft_font::{ExternalFont, Font, external};
///
/// let font = external(ExternalFont {
///     name: "EB Garamond".into(),
///     url: "https://fonts.googleapis.com/css?family=EB+Garamond".into(),
/// });
/// assert_eq!(font.import_url(), Some("https://fonts.googleapis.com/css?family=EB+Garamond"));
/// assert!(matches!(font, Font::ImportFont { .. }));
/// ```
#[must_use]
pub fn external(font: ExternalFont) -> Font {
    Font::ImportFont {
        name: font.name,
        url: font.url,
    }
}

/// A font with metric corrections for capital-height sizing.
#[must_use]
pub fn with(font: CustomFont) -> Font {
    Font::FontWith {
        name: font.name,
        adjustment: font.adjustment,
        url: font.url,
    }
}

/// Import URLs needed by `fonts`, first occurrence first.
#[must_use]
pub fn import_urls(fonts: &[Font]) -> Vec<&str> {
    let mut seen = AHashSet::new();
    fonts
        .iter()
        .filter_map(Font::import_url)
        .filter(|url| seen.insert(*url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(serif().class_fragment(), "serif");
        assert_eq!(sans_serif().class_fragment(), "sans-serif");
        assert_eq!(monospace().class_fragment(), "monospace");
        assert_eq!(typeface("Open Sans").class_fragment(), "open-sans");
        assert_eq!(typeface("  Fira\tCode ").class_fragment(), "fira-code");
        assert_eq!(typeface("Roboto.Mono").class_fragment(), "roboto-mono");
    }

    #[test]
    fn css_families_quote_names_only() {
        assert_eq!(serif().css_family(), "serif");
        assert_eq!(typeface("Helvetica").css_family(), "\"Helvetica\"");
        assert_eq!(typeface("A \"B\"").css_family(), "\"A \\\"B\\\"\"");
        assert_eq!(typeface("Trail\\").css_family(), "\"Trail\\\\\"");
        assert_eq!(typeface("a\\\"b").css_family(), "\"a\\\\\\\"b\"");
    }

    #[test]
    fn with_keeps_optional_url() {
        let local = with(CustomFont {
            name: "Inter".into(),
            adjustment: Adjustment::default(),
            url: None,
        });
        assert_eq!(local.import_url(), None);
        assert_eq!(local.name(), Some("Inter"));
        assert_eq!(local.adjustment(), Some(&Adjustment::default()));

        let remote = with(CustomFont {
            name: "Inter".into(),
            adjustment: Adjustment::default(),
            url: Some("https://rsms.me/inter/inter.css".into()),
        });
        assert_eq!(remote.import_url(), Some("https://rsms.me/inter/inter.css"));
    }

    #[test]
    fn import_urls_dedupe_in_order() {
        let fonts = [
            external(ExternalFont {
                name: "B".into(),
                url: "b.css".into(),
            }),
            serif(),
            external(ExternalFont {
                name: "A".into(),
                url: "a.css".into(),
            }),
            external(ExternalFont {
                name: "B bold".into(),
                url: "b.css".into(),
            }),
        ];
        assert_eq!(import_urls(&fonts), vec!["b.css", "a.css"]);
    }

    #[test]
    fn generic_fonts_have_no_name_or_url() {
        for font in [serif(), sans_serif(), monospace(), typeface("X")] {
            assert_eq!(font.import_url(), None);
            assert!(font.adjustment().is_none());
        }
        assert_eq!(monospace().name(), None);
    }
}
