#![forbid(unsafe_code)]

//! OpenType feature switches, emitted as `font-feature-settings`.

use weft_style::{Attribute, Flag, Style};

/// A single OpenType feature setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Feature turned on.
    Active(String),
    /// Feature explicitly turned off.
    Off(String),
    /// Feature set to a specific alternate index.
    Indexed(String, i32),
}

impl Variant {
    /// The four-letter feature tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Active(tag) | Self::Off(tag) | Self::Indexed(tag, _) => tag,
        }
    }

    /// Class fragment: the tag, with `-0` for off or `-{index}` for indexed.
    #[must_use]
    pub fn class_fragment(&self) -> String {
        match self {
            Self::Active(tag) => tag.clone(),
            Self::Off(tag) => format!("{tag}-0"),
            Self::Indexed(tag, index) => format!("{tag}-{index}"),
        }
    }

    /// One `font-feature-settings` entry.
    #[must_use]
    pub fn css_value(&self) -> String {
        match self {
            Self::Active(tag) => format!("\"{tag}\""),
            Self::Off(tag) => format!("\"{tag}\" 0"),
            Self::Indexed(tag, index) => format!("\"{tag}\" {index}"),
        }
    }
}

#[must_use]
pub fn small_caps() -> Variant {
    Variant::Active("smcp".into())
}

/// Zero with a slash through it.
#[must_use]
pub fn slashed_zero() -> Variant {
    Variant::Active("zero".into())
}

#[must_use]
pub fn ligatures() -> Variant {
    Variant::Active("liga".into())
}

/// Ordinal markers such as `1st`.
#[must_use]
pub fn ordinal() -> Variant {
    Variant::Active("ordn".into())
}

/// Digits of equal width.
#[must_use]
pub fn tabular_numbers() -> Variant {
    Variant::Active("tnum".into())
}

#[must_use]
pub fn stacked_fractions() -> Variant {
    Variant::Active("afrc".into())
}

#[must_use]
pub fn diagonal_fractions() -> Variant {
    Variant::Active("frac".into())
}

/// Swash alternate number `index`.
#[must_use]
pub fn swash(index: i32) -> Variant {
    Variant::Indexed("swsh".into(), index)
}

/// Turn an arbitrary feature on or off.
#[must_use]
pub fn feature(tag: impl Into<String>, on: bool) -> Variant {
    if on {
        Variant::Active(tag.into())
    } else {
        Variant::Off(tag.into())
    }
}

/// Select alternate `index` of a feature, or turn it off.
#[must_use]
pub fn indexed(tag: impl Into<String>, index: i32, on: bool) -> Variant {
    if on {
        Variant::Indexed(tag.into(), index)
    } else {
        Variant::Off(tag.into())
    }
}

/// Apply a single font feature.
#[must_use]
pub fn variant(variant: Variant) -> Attribute {
    Attribute::style_class(
        Flag::FONT_VARIANT,
        Style::Single {
            class: format!("v-{}", variant.class_fragment()),
            property: "font-feature-settings",
            value: variant.css_value(),
        },
    )
}

/// Apply several font features at once.
///
/// ```
/// use weft_font::{small_caps, swash, variant_list};
/// use weft_style::Style;
///
/// let attr = variant_list(vec![small_caps(), swash(2)]);
/// assert_eq!(
///     attr.style(),
///     Some(&Style::Single {
///         class: "v-smcp-swsh-2".into(),
///         property: "font-feature-settings",
///         value: "\"smcp\", \"swsh\" 2".into(),
///     })
/// );
/// ```
#[must_use]
pub fn variant_list(variants: Vec<Variant>) -> Attribute {
    let class = variants
        .iter()
        .map(Variant::class_fragment)
        .collect::<Vec<_>>()
        .join("-");
    let value = variants
        .iter()
        .map(Variant::css_value)
        .collect::<Vec<_>>()
        .join(", ");
    Attribute::style_class(
        Flag::FONT_VARIANT,
        Style::Single {
            class: format!("v-{class}"),
            property: "font-feature-settings",
            value,
        },
    )
}
