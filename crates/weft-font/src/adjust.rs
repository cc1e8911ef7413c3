#![forbid(unsafe_code)]

//! Font metric corrections for capital-height sizing.
//!
//! An [`Adjustment`] records where a typeface's capital, lowercase,
//! baseline, and descender lines sit, as ratios of the font size. From
//! those lines [`Adjustment::convert`] derives the scale and offset that
//! make `font-size` mean capital height (or full ascender-to-descender
//! height) instead of the em box.
//!
//! Degenerate adjustments (e.g. all lines equal) divide by zero and produce
//! infinite sizes; they are emitted as given.

use weft_style::Rule;
use weft_style::classes;

use crate::font::Font;

/// Line positions of a typeface, as ratios of its font size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    pub capital: f32,
    pub lowercase: f32,
    pub baseline: f32,
    pub descender: f32,
}

impl Adjustment {
    pub const DEFAULT_CAPITAL: f32 = 1.15;
    pub const DEFAULT_LOWERCASE: f32 = 0.96;
    pub const DEFAULT_BASELINE: f32 = 0.45;
    pub const DEFAULT_DESCENDER: f32 = 0.275;

    /// Scale and offset for full-height and capital-height sizing.
    #[must_use]
    pub fn convert(&self) -> ConvertedAdjustment {
        let lines = [self.capital, self.baseline, self.descender, self.lowercase];
        let ascender = lines.iter().copied().fold(f32::MIN, f32::max);
        let descender = lines.iter().copied().fold(f32::MAX, f32::min);
        let baseline = lines
            .iter()
            .copied()
            .filter(|line| *line != descender)
            .reduce(f32::min)
            .unwrap_or(self.baseline);

        let vertical = 1.0 - ascender;
        let capital_size = 1.0 / (ascender - baseline);
        let full_size = 1.0 / (ascender - descender);

        ConvertedAdjustment {
            full: Sizing::new(full_size, ascender - descender, vertical),
            capital: Sizing::new(capital_size, ascender - baseline, vertical),
        }
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self {
            capital: Self::DEFAULT_CAPITAL,
            lowercase: Self::DEFAULT_LOWERCASE,
            baseline: Self::DEFAULT_BASELINE,
            descender: Self::DEFAULT_DESCENDER,
        }
    }
}

/// Scale, line height, and vertical offset for one sizing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Multiplier applied to `font-size`, in `em`.
    pub size: f32,
    /// Resulting `line-height`.
    pub height: f32,
    /// `vertical-align` offset, in `em`.
    pub vertical: f32,
}

impl Sizing {
    fn new(size: f32, span: f32, vertical: f32) -> Self {
        Self {
            size,
            height: span / size,
            vertical,
        }
    }

    fn apply(&self, rule: Rule) -> Rule {
        rule.declare("display", "inline-block")
            .declare("line-height", self.height.to_string())
            .declare("vertical-align", format!("{}em", self.vertical))
            .declare("font-size", format!("{}em", self.size))
    }
}

/// Result of [`Adjustment::convert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedAdjustment {
    pub full: Sizing,
    pub capital: Sizing,
}

/// Rules applying the first adjusted font in `fonts` to elements carrying
/// `family_class`.
///
/// Returns nothing when no font in the stack has an adjustment. The rules
/// target both the element itself and its descendants.
#[must_use]
pub fn adjustment_rules(family_class: &str, fonts: &[Font]) -> Vec<Rule> {
    let Some(adjustment) = fonts.iter().find_map(Font::adjustment) else {
        return Vec::new();
    };
    let converted = adjustment.convert();

    let selector = |class: &str| format!(".{family_class}.{class}, .{family_class} .{class}");
    vec![
        converted
            .capital
            .apply(Rule::new(selector(classes::SIZE_BY_CAPITAL))),
        converted
            .full
            .apply(Rule::new(selector(classes::FULL_SIZE))),
    ]
}
