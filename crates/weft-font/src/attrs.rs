#![forbid(unsafe_code)]

//! Font attributes.
//!
//! Every constructor is pure. Out-of-range input (negative sizes, negative
//! blur) is passed through to CSS unchanged.
//!
//! Constructors returning [`Attr<K>`] can be used either as a regular
//! [`Attribute`] or as a [`Decoration`](weft_style::Decoration); the target
//! type picks the marker.

use weft_style::classes::{self, float_class};
use weft_style::{Attr, AttrMarker, Attribute, Color, Flag, Style};

use crate::font::Font;

/// Text color.
#[must_use]
pub fn color<K: AttrMarker>(color: Color) -> Attr<K> {
    Attr::style_class(
        Flag::FONT_COLOR,
        Style::Colored {
            class: format!("fc-{}", color.class_fragment()),
            property: "color",
            color,
        },
    )
}

/// Font size in pixels.
#[must_use]
pub fn size<K: AttrMarker>(size: i32) -> Attr<K> {
    Attr::style_class(Flag::FONT_SIZE, Style::FontSize(size))
}

/// Class name for a font stack: `ff-` followed by each font's fragment, in
/// order.
#[must_use]
pub fn family_class(fonts: &[Font]) -> String {
    fonts.iter().fold(String::from("ff-"), |mut class, font| {
        class.push_str(&font.class_fragment());
        class
    })
}

/// Font stack, first entry preferred.
///
/// ```
/// use weft_font::{family, sans_serif, typeface};
///
/// let attr: weft_style::Attribute = family(vec![typeface("Helvetica"), sans_serif()]);
/// assert_eq!(attr.class_name(), "ff-helveticasans-serif");
/// ```
#[must_use]
pub fn family(fonts: Vec<Font>) -> Attribute {
    Attr::style_class(
        Flag::FONT_FAMILY,
        Style::FontFamily {
            class: family_class(&fonts),
            families: fonts.iter().map(Font::css_family).collect(),
        },
    )
}

/// Size text by its capital height rather than the em box.
///
/// Pairs with fonts built by [`with`](crate::with), whose adjustments
/// supply the metrics.
#[must_use]
pub fn size_by_capital() -> Attribute {
    Attr::html_class(classes::SIZE_BY_CAPITAL)
}

/// Extra space between letters, in pixels.
#[must_use]
pub fn letter_spacing(offset: f32) -> Attribute {
    Attr::style_class(
        Flag::LETTER_SPACING,
        Style::Single {
            class: format!("ls-{}", float_class(offset)),
            property: "letter-spacing",
            value: format!("{offset}px"),
        },
    )
}

/// Extra space between words, in pixels.
#[must_use]
pub fn word_spacing(offset: f32) -> Attribute {
    Attr::style_class(
        Flag::WORD_SPACING,
        Style::Single {
            class: format!("ws-{}", float_class(offset)),
            property: "word-spacing",
            value: format!("{offset}px"),
        },
    )
}

#[must_use]
pub fn align_left() -> Attribute {
    Attr::class(Flag::FONT_ALIGNMENT, classes::TEXT_LEFT)
}

#[must_use]
pub fn align_right() -> Attribute {
    Attr::class(Flag::FONT_ALIGNMENT, classes::TEXT_RIGHT)
}

#[must_use]
pub fn center() -> Attribute {
    Attr::class(Flag::FONT_ALIGNMENT, classes::TEXT_CENTER)
}

#[must_use]
pub fn justify() -> Attribute {
    Attr::class(Flag::FONT_ALIGNMENT, classes::TEXT_JUSTIFY)
}

#[must_use]
pub fn underline() -> Attribute {
    Attr::html_class(classes::UNDERLINE)
}

/// Line through the text.
#[must_use]
pub fn strike() -> Attribute {
    Attr::html_class(classes::STRIKE)
}

#[must_use]
pub fn italic() -> Attribute {
    Attr::html_class(classes::ITALIC)
}

/// Undo an inherited italic.
#[must_use]
pub fn unitalicized() -> Attribute {
    Attr::html_class(classes::TEXT_UNITALICIZED)
}

/// Weight 900.
#[must_use]
pub fn heavy() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_HEAVY)
}

/// Weight 800.
#[must_use]
pub fn extra_bold() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_EXTRA_BOLD)
}

/// Weight 700.
#[must_use]
pub fn bold() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::BOLD)
}

/// Weight 600.
#[must_use]
pub fn semi_bold() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_SEMI_BOLD)
}

/// Weight 500.
#[must_use]
pub fn medium() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_MEDIUM)
}

/// Weight 400.
#[must_use]
pub fn regular() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_NORMAL_WEIGHT)
}

/// Weight 300.
#[must_use]
pub fn light() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_LIGHT)
}

/// Weight 200.
#[must_use]
pub fn extra_light() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_EXTRA_LIGHT)
}

/// Weight 100.
#[must_use]
pub fn hairline() -> Attribute {
    Attr::class(Flag::FONT_WEIGHT, classes::TEXT_THIN)
}

/// A text shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Horizontal and vertical offset in pixels.
    pub offset: (f32, f32),
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    /// Class name: `txt`, then each length with a `px` separator, then the
    /// color fragment.
    #[must_use]
    pub fn class_name(&self) -> String {
        let (x, y) = self.offset;
        format!(
            "txt{}px{}px{}px{}",
            float_class(x),
            float_class(y),
            float_class(self.blur),
            self.color.class_fragment()
        )
    }

    /// The `text-shadow` value, e.g. `2px 3px 4px rgba(0,0,0,1)`.
    #[must_use]
    pub fn css_value(&self) -> String {
        let (x, y) = self.offset;
        format!("{x}px {y}px {}px {}", self.blur, self.color.to_css())
    }
}

/// Text shadow.
#[must_use]
pub fn shadow<K: AttrMarker>(shadow: Shadow) -> Attr<K> {
    Attr::style_class(
        Flag::TXT_SHADOWS,
        Style::Single {
            class: shadow.class_name(),
            property: "text-shadow",
            value: shadow.css_value(),
        },
    )
}

/// A centered shadow whose blur is twice `radius`.
#[must_use]
pub fn glow<K: AttrMarker>(color: Color, radius: f32) -> Attr<K> {
    shadow(Shadow {
        offset: (0.0, 0.0),
        blur: radius * 2.0,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{monospace, serif, typeface};
    use weft_style::{AttrValue, Decoration};

    fn single(attr: &Attribute) -> (&str, &'static str, &str) {
        match attr.value() {
            AttrValue::StyleClass {
                style:
                    Style::Single {
                        class,
                        property,
                        value,
                    },
                ..
            } => (class.as_str(), *property, value.as_str()),
            other => panic!("expected a single-property style, got {other:?}"),
        }
    }

    #[test]
    fn size_eighteen() {
        let attr: Attribute = size(18);
        assert_eq!(attr.flag(), Some(Flag::FONT_SIZE));
        assert_eq!(attr.class_name(), "font-size-18");
        assert_eq!(
            attr.style().unwrap().declarations(),
            vec![("font-size", "18px".to_string())]
        );
    }

    #[test]
    fn negative_size_passes_through() {
        let attr: Attribute = size(-4);
        assert_eq!(
            attr.style().unwrap().declarations(),
            vec![("font-size", "-4px".to_string())]
        );
    }

    #[test]
    fn color_class_from_fragment() {
        let attr: Decoration = color(Color::rgb255(255, 0, 0));
        assert_eq!(attr.flag(), Some(Flag::FONT_COLOR));
        assert_eq!(attr.class_name(), "fc-255-0-0-1");
        assert_eq!(
            attr.style().unwrap().declarations(),
            vec![("color", "rgba(255,0,0,1)".to_string())]
        );
    }

    #[test]
    fn family_concatenates_in_order() {
        let attr = family(vec![typeface("Open Sans"), serif(), monospace()]);
        assert_eq!(attr.flag(), Some(Flag::FONT_FAMILY));
        assert_eq!(attr.class_name(), "ff-open-sansserifmonospace");
        assert_eq!(
            attr.style().unwrap().declarations(),
            vec![("font-family", "\"Open Sans\", serif, monospace".to_string())]
        );
    }

    #[test]
    fn empty_family() {
        assert_eq!(family(Vec::new()).class_name(), "ff-");
    }

    #[test]
    fn spacing_values() {
        assert_eq!(
            single(&letter_spacing(1.5)),
            ("ls-1p5", "letter-spacing", "1.5px")
        );
        assert_eq!(single(&word_spacing(-2.0)), ("ws-m2", "word-spacing", "-2px"));
        assert_eq!(letter_spacing(0.0).flag(), Some(Flag::LETTER_SPACING));
        assert_eq!(word_spacing(0.0).flag(), Some(Flag::WORD_SPACING));
    }

    #[test]
    fn shadow_value_and_class() {
        let attr: Attribute = shadow(Shadow {
            offset: (2.0, 3.0),
            blur: 4.0,
            color: Color::BLACK,
        });
        assert_eq!(attr.flag(), Some(Flag::TXT_SHADOWS));
        assert_eq!(
            single(&attr),
            ("txt2px3px4px0-0-0-1", "text-shadow", "2px 3px 4px rgba(0,0,0,1)")
        );
    }

    #[test]
    fn glow_doubles_blur() {
        let attr: Attribute = glow(Color::WHITE, 1.5);
        assert_eq!(single(&attr).2, "0px 0px 3px rgba(255,255,255,1)");
    }

    #[test]
    fn close_alphas_keep_distinct_classes() {
        let half = Color::rgba(0.0, 0.0, 0.0, 0.5);
        let nearly_half = Color::rgba(0.0, 0.0, 0.0, 0.501);

        let a: Attribute = color(half);
        let b: Attribute = color(nearly_half);
        assert_ne!(a.class_name(), b.class_name());
        assert_eq!(a.class_name(), "fc-0-0-0-0p5");

        let shade = |color| Shadow {
            offset: (1.0, 1.0),
            blur: 2.0,
            color,
        };
        let a: Attribute = shadow(shade(half));
        let b: Attribute = shadow(shade(nearly_half));
        assert_ne!(single(&a).0, single(&b).0);
        assert_ne!(single(&a).2, single(&b).2);
    }

    #[test]
    fn decorations_are_unflagged() {
        for attr in [underline(), strike(), italic(), unitalicized(), size_by_capital()] {
            assert_eq!(attr.flag(), None);
            assert!(attr.style().is_none());
        }
        assert_eq!(underline().class_name(), "u");
        assert_eq!(strike().class_name(), "sk");
        assert_eq!(italic().class_name(), "i");
        assert_eq!(unitalicized().class_name(), "tun");
        assert_eq!(size_by_capital().class_name(), "cap");
    }

    #[test]
    fn weights_map_to_classes() {
        let weights = [
            (hairline(), "w1"),
            (extra_light(), "w2"),
            (light(), "w3"),
            (regular(), "w4"),
            (medium(), "w5"),
            (semi_bold(), "w6"),
            (bold(), "w7"),
            (extra_bold(), "w8"),
            (heavy(), "w9"),
        ];
        for (attr, class) in weights {
            assert_eq!(attr.flag(), Some(Flag::FONT_WEIGHT));
            assert_eq!(attr.class_name(), class);
        }
    }

    #[test]
    fn alignments_map_to_classes() {
        let alignments = [
            (align_left(), "tl"),
            (align_right(), "tr"),
            (center(), "tc"),
            (justify(), "tj"),
        ];
        for (attr, class) in alignments {
            assert_eq!(attr.flag(), Some(Flag::FONT_ALIGNMENT));
            assert_eq!(attr.class_name(), class);
        }
    }
}
