#![forbid(unsafe_code)]

//! Fixed class names and helpers for generated ones.
//!
//! Short names keep rendered markup small. The static rules backing these
//! classes live in [`crate::sheet::static_rules`].

pub const TEXT_THIN: &str = "w1";
pub const TEXT_EXTRA_LIGHT: &str = "w2";
pub const TEXT_LIGHT: &str = "w3";
pub const TEXT_NORMAL_WEIGHT: &str = "w4";
pub const TEXT_MEDIUM: &str = "w5";
pub const TEXT_SEMI_BOLD: &str = "w6";
pub const BOLD: &str = "w7";
pub const TEXT_EXTRA_BOLD: &str = "w8";
pub const TEXT_HEAVY: &str = "w9";

pub const ITALIC: &str = "i";
pub const TEXT_UNITALICIZED: &str = "tun";
pub const UNDERLINE: &str = "u";
pub const STRIKE: &str = "sk";

pub const TEXT_LEFT: &str = "tl";
pub const TEXT_RIGHT: &str = "tr";
pub const TEXT_CENTER: &str = "tc";
pub const TEXT_JUSTIFY: &str = "tj";

pub const SIZE_BY_CAPITAL: &str = "cap";
pub const FULL_SIZE: &str = "fs";

/// Weight classes paired with their numeric CSS weight, lightest first.
pub const WEIGHTS: [(&str, u16); 9] = [
    (TEXT_THIN, 100),
    (TEXT_EXTRA_LIGHT, 200),
    (TEXT_LIGHT, 300),
    (TEXT_NORMAL_WEIGHT, 400),
    (TEXT_MEDIUM, 500),
    (TEXT_SEMI_BOLD, 600),
    (BOLD, 700),
    (TEXT_EXTRA_BOLD, 800),
    (TEXT_HEAVY, 900),
];

/// Class-safe rendering of a number.
///
/// Starts from the shortest decimal form of `value` and maps `-` to `m`
/// and `.` to `p`. Distinct values give distinct fragments.
///
/// ```
/// use weft_style::classes::float_class;
///
/// assert_eq!(float_class(2.0), "2");
/// assert_eq!(float_class(-1.5), "m1p5");
/// ```
#[must_use]
pub fn float_class(value: f32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => 'm',
            '.' => 'p',
            other => other,
        })
        .collect()
}

/// Lower-case a display name and join its alphanumeric runs with `-`.
///
/// ```
/// use weft_style::classes::name_class;
///
/// assert_eq!(name_class("Open  Sans"), "open-sans");
/// ```
#[must_use]
pub fn name_class(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn float_class_examples() {
        assert_eq!(float_class(0.0), "0");
        assert_eq!(float_class(-0.0), "m0");
        assert_eq!(float_class(0.25), "0p25");
        assert_eq!(float_class(-12.0), "m12");
    }

    #[test]
    fn name_class_keeps_only_word_characters() {
        assert_eq!(name_class("Roboto.Mono"), "roboto-mono");
        assert_eq!(name_class("Foo:Bar/Baz"), "foo-bar-baz");
        assert_eq!(name_class("  Fira\tCode "), "fira-code");
        assert_eq!(name_class("A \"B\""), "a-b");
        assert_eq!(name_class("Noto Sans JP"), "noto-sans-jp");
    }

    #[test]
    fn weights_are_ordered() {
        assert!(WEIGHTS.windows(2).all(|w| w[0].1 < w[1].1));
    }

    proptest! {
        #[test]
        fn float_class_is_injective(a in any::<f32>(), b in any::<f32>()) {
            prop_assume!(!a.is_nan() && !b.is_nan());
            prop_assert_eq!(float_class(a) == float_class(b), a.to_bits() == b.to_bits());
        }

        #[test]
        fn name_class_is_class_safe(name in ".{0,24}") {
            let class = name_class(&name);
            prop_assert!(class.chars().all(|c| c.is_alphanumeric() || c == '-'));
            prop_assert!(!class.starts_with('-') && !class.ends_with('-'));
        }

        #[test]
        fn float_class_is_class_safe(x in -1.0e6f32..1.0e6) {
            let class = float_class(x);
            prop_assert!(class.chars().all(|c| c.is_ascii_digit() || c == 'm' || c == 'p'));
        }
    }
}
