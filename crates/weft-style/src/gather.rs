#![forbid(unsafe_code)]

//! Resolve an element's attribute list into classes and styles.
//!
//! # Invariants
//!
//! 1. **Last flag wins**: among attributes sharing a flag, only the last one
//!    in input order survives.
//! 2. **Unflagged classes are additive**: every distinct plain class is kept.
//! 3. **Order is preserved**: surviving classes appear in input order.
//! 4. **One entry per class**: a class name, and the style behind it, is
//!    emitted at most once.

use std::borrow::Cow;

use ahash::AHashSet;

use crate::flag::Flag;
use crate::sheet::StyleSheet;
use crate::style::{Attr, AttrMarker, AttrValue, Style};

/// The resolved form of an element's attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gathered {
    /// Class names to put on the element.
    pub classes: Vec<Cow<'static, str>>,
    /// Styles whose rules must exist in the stylesheet.
    pub styles: Vec<Style>,
    /// Every flag that was claimed.
    pub flags: Flag,
}

impl Gathered {
    /// Space-separated class attribute value.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }

    /// Push every gathered style's rule into `sheet`.
    pub fn register(&self, sheet: &mut StyleSheet) {
        for style in &self.styles {
            sheet.push_style(style);
        }
    }
}

/// Resolve `attrs`, keeping the last attribute for each flag.
///
/// ```
/// use weft_style::{Attribute, Flag, classes, gather};
///
/// let gathered = gather([
///     Attribute::class(Flag::FONT_WEIGHT, classes::BOLD),
///     Attribute::html_class(classes::UNDERLINE),
///     Attribute::class(Flag::FONT_WEIGHT, classes::TEXT_LIGHT),
/// ]);
/// assert_eq!(gathered.class_attribute(), "u w3");
/// ```
pub fn gather<K, I>(attrs: I) -> Gathered
where
    K: AttrMarker,
    I: IntoIterator<Item = Attr<K>>,
{
    let attrs: Vec<Attr<K>> = attrs.into_iter().collect();
    let mut flags = Flag::empty();
    let mut seen: AHashSet<Cow<'static, str>> = AHashSet::new();
    let mut classes = Vec::with_capacity(attrs.len());
    let mut styles = Vec::new();

    for attr in attrs.into_iter().rev() {
        if let Some(flag) = attr.flag() {
            if flags.intersects(flag) {
                tracing::trace!(
                    flag = flag.name(),
                    class = %attr.class_name(),
                    "attribute overridden by a later one"
                );
                continue;
            }
            flags |= flag;
        }

        let (name, style) = match attr.into_value() {
            AttrValue::StyleClass { style, .. } => {
                (Cow::Owned(style.class_name().into_owned()), Some(style))
            }
            AttrValue::Class { name, .. } | AttrValue::HtmlClass(name) => (name, None),
        };
        if !seen.insert(name.clone()) {
            tracing::trace!(class = %name, "skipping duplicate class");
            continue;
        }
        classes.push(name);
        styles.extend(style);
    }

    classes.reverse();
    styles.reverse();
    tracing::trace!(classes = classes.len(), styles = styles.len(), "gathered attributes");
    Gathered {
        classes,
        styles,
        flags,
    }
}
