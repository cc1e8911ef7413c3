#![forbid(unsafe_code)]

//! Attributes and the style values they carry.
//!
//! # Invariants
//!
//! 1. **One flag per attribute**: flagged variants carry a single category
//!    bit; [`AttrValue::HtmlClass`] carries none and is always additive.
//!
//! 2. **Deterministic class names**: [`Style::class_name`] is a pure
//!    function of the style's contents, so equal styles share a class and
//!    a rule.
//!
//! 3. **Marker only**: [`Decorative`] and [`Regular`] have no runtime
//!    representation. A decoration converts to a regular attribute without
//!    changing its value.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::color::Color;
use crate::flag::Flag;

/// A style that implies a generated class and its CSS declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    /// `font-family`, with the families already in CSS form.
    FontFamily {
        class: String,
        families: Vec<String>,
    },
    /// `font-size` in whole pixels.
    FontSize(i32),
    /// A single property with a preformatted value.
    Single {
        class: String,
        property: &'static str,
        value: String,
    },
    /// A single color-valued property.
    Colored {
        class: String,
        property: &'static str,
        color: Color,
    },
}

impl Style {
    /// The generated class name for this style.
    #[must_use]
    pub fn class_name(&self) -> Cow<'_, str> {
        match self {
            Self::FontFamily { class, .. }
            | Self::Single { class, .. }
            | Self::Colored { class, .. } => Cow::Borrowed(class.as_str()),
            Self::FontSize(size) => Cow::Owned(format!("font-size-{size}")),
        }
    }

    /// The CSS declarations implied by this style, in order.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::FontFamily { families, .. } => vec![("font-family", families.join(", "))],
            Self::FontSize(size) => vec![("font-size", format!("{size}px"))],
            Self::Single {
                property, value, ..
            } => vec![(*property, value.clone())],
            Self::Colored {
                property, color, ..
            } => vec![(*property, color.to_css())],
        }
    }

    /// The CSS property this style sets.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            Self::FontFamily { .. } => "font-family",
            Self::FontSize(_) => "font-size",
            Self::Single { property, .. } | Self::Colored { property, .. } => *property,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Phantom marker distinguishing decorations from regular attributes.
pub trait AttrMarker: sealed::Sealed {}

/// Marker for attributes that only change appearance.
///
/// Decorations can be used wherever a regular attribute is accepted (via
/// [`From`]), and also in state-dependent styling such as hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorative;

/// Marker for attributes that may carry semantic information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regular;

impl sealed::Sealed for Decorative {}
impl sealed::Sealed for Regular {}
impl AttrMarker for Decorative {}
impl AttrMarker for Regular {}

/// Runtime shape of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A generated class plus the rule it needs.
    StyleClass { flag: Flag, style: Style },
    /// A fixed class name tagged with a flag.
    Class {
        flag: Flag,
        name: Cow<'static, str>,
    },
    /// A fixed class name with no flag.
    HtmlClass(Cow<'static, str>),
}

/// An attribute attached to an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr<K: AttrMarker = Regular> {
    value: AttrValue,
    marker: PhantomData<fn() -> K>,
}

/// An attribute usable anywhere.
pub type Attribute = Attr<Regular>;

/// An attribute that only changes appearance.
pub type Decoration = Attr<Decorative>;

impl<K: AttrMarker> Attr<K> {
    #[must_use]
    pub fn style_class(flag: Flag, style: Style) -> Self {
        Self::from_value(AttrValue::StyleClass { flag, style })
    }

    #[must_use]
    pub fn class(flag: Flag, name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_value(AttrValue::Class {
            flag,
            name: name.into(),
        })
    }

    #[must_use]
    pub fn html_class(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_value(AttrValue::HtmlClass(name.into()))
    }

    #[must_use]
    pub fn from_value(value: AttrValue) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> AttrValue {
        self.value
    }

    /// The category flag, if the attribute has one.
    #[must_use]
    pub fn flag(&self) -> Option<Flag> {
        match &self.value {
            AttrValue::StyleClass { flag, .. } | AttrValue::Class { flag, .. } => Some(*flag),
            AttrValue::HtmlClass(_) => None,
        }
    }

    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        match &self.value {
            AttrValue::StyleClass { style, .. } => Some(style),
            _ => None,
        }
    }

    /// The class name this attribute adds to its element.
    #[must_use]
    pub fn class_name(&self) -> Cow<'_, str> {
        match &self.value {
            AttrValue::StyleClass { style, .. } => style.class_name(),
            AttrValue::Class { name, .. } | AttrValue::HtmlClass(name) => {
                Cow::Borrowed(name.as_ref())
            }
        }
    }
}

impl From<Decoration> for Attribute {
    fn from(decoration: Decoration) -> Self {
        Self::from_value(decoration.value)
    }
}
