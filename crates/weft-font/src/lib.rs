#![forbid(unsafe_code)]

//! Font attributes for weft.
//!
//! Each function here builds an attribute value; nothing is rendered until
//! the element tree gathers its attributes and registers their styles.
//!
//! # Example
//!
//! ```
//! use weft_font as font;
//! use weft_style::{Attribute, Color, SheetOptions, StyleSheet, gather};
//!
//! let attrs: Vec<Attribute> = vec![
//!     font::family(vec![font::typeface("Helvetica"), font::sans_serif()]),
//!     font::size(18),
//!     font::color(Color::rgb255(0x33, 0x33, 0x33)),
//!     font::bold(),
//!     font::center(),
//!     font::italic(),
//! ];
//!
//! let gathered = gather(attrs);
//! assert_eq!(
//!     gathered.class_attribute(),
//!     "ff-helveticasans-serif font-size-18 fc-51-51-51-1 w7 tc i"
//! );
//!
//! let mut sheet = StyleSheet::new(SheetOptions::default());
//! gathered.register(&mut sheet);
//! assert!(sheet.render().contains(".font-size-18{font-size:18px;}"));
//! ```
//!
//! # Invariants
//!
//! 1. Weight constructors share [`Flag::FONT_WEIGHT`] and alignment
//!    constructors share [`Flag::FONT_ALIGNMENT`], so at most one of each
//!    survives gathering.
//! 2. Decorations (`underline`, `strike`, `italic`, `unitalicized`) carry no
//!    flag and always accumulate.
//! 3. Generated class names are deterministic functions of the inputs.

pub mod adjust;
pub mod attrs;
pub mod font;
pub mod variant;

pub use adjust::{Adjustment, ConvertedAdjustment, Sizing, adjustment_rules};
pub use attrs::{
    Shadow, align_left, align_right, bold, center, color, extra_bold, extra_light, family,
    family_class, glow, hairline, heavy, italic, justify, letter_spacing, light, medium, regular,
    semi_bold, shadow, size, size_by_capital, strike, underline, unitalicized, word_spacing,
};
pub use font::{
    CustomFont, ExternalFont, Font, external, import_urls, monospace, sans_serif, serif, typeface,
    with,
};
pub use variant::{
    Variant, diagonal_fractions, feature, indexed, ligatures, ordinal, slashed_zero, small_caps,
    stacked_fractions, swash, tabular_numbers, variant, variant_list,
};

use weft_style::{Flag, StyleSheet};

/// Register what a font stack needs beyond its family rule: `@import`s for
/// web fonts and capital-height sizing rules for adjusted fonts.
///
/// Returns the number of imports and rules that were newly added.
pub fn register_fonts(sheet: &mut StyleSheet, fonts: &[Font]) -> usize {
    let class = family_class(fonts);
    let _span = tracing::debug_span!(
        "register_fonts",
        flag = Flag::FONT_FAMILY.name(),
        family = %class
    )
    .entered();

    let mut added = 0;
    for url in import_urls(fonts) {
        if sheet.push_import(url) {
            added += 1;
        }
    }
    for rule in adjustment_rules(&class, fonts) {
        if sheet.push_rule(rule) {
            added += 1;
        }
    }
    tracing::debug!(added, "fonts registered");
    added
}
