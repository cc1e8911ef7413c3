#![forbid(unsafe_code)]

//! Attribute categories used to pick one winner per element.
//!
//! Every flagged attribute carries exactly one bit. A set of bits records
//! which categories an element has already resolved.

bitflags::bitflags! {
    /// One or more attribute categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flag: u32 {
        const FONT_COLOR = 1 << 0;
        const FONT_SIZE = 1 << 1;
        const FONT_FAMILY = 1 << 2;
        const FONT_WEIGHT = 1 << 3;
        const FONT_ALIGNMENT = 1 << 4;
        const LETTER_SPACING = 1 << 5;
        const WORD_SPACING = 1 << 6;
        const TXT_SHADOWS = 1 << 7;
        const FONT_VARIANT = 1 << 8;
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::empty()
    }
}

impl Flag {
    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        const NAMES: [(Flag, &str); 9] = [
            (Flag::FONT_COLOR, "font-color"),
            (Flag::FONT_SIZE, "font-size"),
            (Flag::FONT_FAMILY, "font-family"),
            (Flag::FONT_WEIGHT, "font-weight"),
            (Flag::FONT_ALIGNMENT, "font-alignment"),
            (Flag::LETTER_SPACING, "letter-spacing"),
            (Flag::WORD_SPACING, "word-spacing"),
            (Flag::TXT_SHADOWS, "text-shadows"),
            (Flag::FONT_VARIANT, "font-variant"),
        ];
        NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map_or("mixed", |(_, name)| *name)
    }
}
