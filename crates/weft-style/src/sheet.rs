#![forbid(unsafe_code)]

//! CSS rule emission.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Duplicate style | Same class pushed twice | Second push ignored |
//! | Duplicate import | Same URL pushed twice | Second push ignored |
//! | Odd values | Negative sizes, NaN offsets | Emitted as given |

use ahash::AHashSet;

use crate::classes;
use crate::style::Style;

/// Options controlling stylesheet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    /// One declaration per line with indentation.
    pub pretty: bool,
    /// Emit `@import` lines for external fonts.
    pub imports: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            imports: true,
        }
    }
}

impl SheetOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn imports(mut self, imports: bool) -> Self {
        self.imports = imports;
        self
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
}

impl Rule {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn declare(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// The rule a generated style needs.
    #[must_use]
    pub fn for_style(style: &Style) -> Self {
        Self {
            selector: format!(".{}", style.class_name()),
            declarations: style.declarations(),
        }
    }

    /// Render this rule as CSS text, including a trailing newline.
    #[must_use]
    pub fn render(&self, options: &SheetOptions) -> String {
        let mut out = String::new();
        if options.pretty {
            out.push_str(&self.selector);
            out.push_str(" {\n");
            for (property, value) in &self.declarations {
                out.push_str(&format!("  {property}: {value};\n"));
            }
            out.push_str("}\n");
        } else {
            out.push_str(&self.selector);
            out.push('{');
            for (property, value) in &self.declarations {
                out.push_str(&format!("{property}:{value};"));
            }
            out.push_str("}\n");
        }
        out
    }
}

/// Rules backing the fixed classes in [`crate::classes`].
#[must_use]
pub fn static_rules() -> Vec<Rule> {
    let mut rules: Vec<Rule> = classes::WEIGHTS
        .iter()
        .map(|(class, weight)| Rule::new(format!(".{class}")).declare("font-weight", weight.to_string()))
        .collect();

    rules.extend([
        Rule::new(format!(".{}", classes::ITALIC)).declare("font-style", "italic"),
        Rule::new(format!(".{}", classes::TEXT_UNITALICIZED)).declare("font-style", "normal"),
        Rule::new(format!(".{}", classes::UNDERLINE)).declare("text-decoration", "underline"),
        Rule::new(format!(".{}", classes::STRIKE)).declare("text-decoration", "line-through"),
        Rule::new(format!(".{}.{}", classes::UNDERLINE, classes::STRIKE))
            .declare("text-decoration", "line-through underline"),
        Rule::new(format!(".{}", classes::TEXT_LEFT)).declare("text-align", "left"),
        Rule::new(format!(".{}", classes::TEXT_RIGHT)).declare("text-align", "right"),
        Rule::new(format!(".{}", classes::TEXT_CENTER)).declare("text-align", "center"),
        Rule::new(format!(".{}", classes::TEXT_JUSTIFY)).declare("text-align", "justify"),
        Rule::new(format!(".{}", classes::SIZE_BY_CAPITAL)).declare("line-height", "1"),
    ]);
    rules
}

/// An ordered, deduplicated collection of rules.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    options: SheetOptions,
    imports: Vec<String>,
    rules: Vec<Rule>,
    seen_imports: AHashSet<String>,
    seen_selectors: AHashSet<String>,
}

impl StyleSheet {
    #[must_use]
    pub fn new(options: SheetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// A sheet that already contains [`static_rules`].
    #[must_use]
    pub fn with_static_rules(options: SheetOptions) -> Self {
        let mut sheet = Self::new(options);
        for rule in static_rules() {
            sheet.push_rule(rule);
        }
        sheet
    }

    #[must_use]
    pub fn options(&self) -> SheetOptions {
        self.options
    }

    /// Add the rule for `style` unless its class is already present.
    pub fn push_style(&mut self, style: &Style) -> bool {
        self.push_rule(Rule::for_style(style))
    }

    /// Add `rule` unless its selector is already present.
    pub fn push_rule(&mut self, rule: Rule) -> bool {
        if !self.seen_selectors.insert(rule.selector.clone()) {
            tracing::trace!(selector = %rule.selector, "skipping duplicate rule");
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Add an `@import` for `url` unless already present.
    pub fn push_import(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.seen_imports.insert(url.clone()) {
            return false;
        }
        self.imports.push(url);
        true
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render imports (when enabled) followed by every rule.
    #[must_use]
    pub fn render(&self) -> String {
        let _span = tracing::debug_span!(
            "stylesheet_render",
            rules = self.rules.len(),
            imports = self.imports.len()
        )
        .entered();

        let mut out = String::new();
        if self.options.imports {
            for url in &self.imports {
                let url = url.replace('\\', "\\\\").replace('\'', "\\'");
                out.push_str(&format!("@import url('{url}');\n"));
            }
        }
        for rule in &self.rules {
            out.push_str(&rule.render(&self.options));
        }
        tracing::debug!(bytes = out.len(), "stylesheet rendered");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn spacing() -> Style {
        Style::Single {
            class: "ls-2".into(),
            property: "letter-spacing",
            value: "2px".into(),
        }
    }

    #[test]
    fn compact_and_pretty_rendering() {
        let rule = Rule::for_style(&Style::FontSize(18));
        assert_eq!(rule.render(&SheetOptions::default()), ".font-size-18{font-size:18px;}\n");
        assert_eq!(
            rule.render(&SheetOptions::new().pretty(true)),
            ".font-size-18 {\n  font-size: 18px;\n}\n"
        );
    }

    #[test]
    fn static_rules_cover_every_weight() {
        let rules = static_rules();
        for (class, weight) in classes::WEIGHTS {
            let selector = format!(".{class}");
            let rule = rules.iter().find(|r| r.selector == selector).unwrap();
            assert_eq!(rule.declarations, vec![("font-weight", weight.to_string())]);
        }
    }

    #[test]
    fn underline_and_strike_combine() {
        let rules = static_rules();
        assert!(rules.iter().any(|r| r.selector == ".u.sk"
            && r.declarations == vec![("text-decoration", "line-through underline".to_string())]));
    }

    #[test]
    fn duplicates_are_dropped() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        assert!(sheet.push_style(&spacing()));
        assert!(!sheet.push_style(&spacing()));
        assert!(sheet.push_import("https://fonts.example/a.css"));
        assert!(!sheet.push_import("https://fonts.example/a.css"));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.imports().len(), 1);
    }

    #[test]
    fn imports_precede_rules_and_can_be_disabled() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        sheet.push_style(&spacing());
        sheet.push_import("https://fonts.example/a.css");
        assert_eq!(
            sheet.render(),
            "@import url('https://fonts.example/a.css');\n.ls-2{letter-spacing:2px;}\n"
        );

        let mut quiet = StyleSheet::new(SheetOptions::new().imports(false));
        quiet.push_style(&spacing());
        quiet.push_import("https://fonts.example/a.css");
        assert_eq!(quiet.render(), ".ls-2{letter-spacing:2px;}\n");
    }

    #[test]
    fn import_urls_are_escaped() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        sheet.push_import("https://fonts.example/it's\\.css");
        assert_eq!(
            sheet.render(),
            "@import url('https://fonts.example/it\\'s\\\\.css');\n"
        );
    }

    #[test]
    fn with_static_rules_starts_populated() {
        let sheet = StyleSheet::with_static_rules(SheetOptions::default());
        assert_eq!(sheet.len(), static_rules().len());
    }

    #[test]
    #[traced_test]
    fn duplicate_rules_are_traced() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        sheet.push_style(&spacing());
        sheet.push_style(&spacing());
        assert!(logs_contain("skipping duplicate rule"));
    }
}
