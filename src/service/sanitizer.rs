//! Removal of custom emoji markup before translation.

use regex::Regex;
use std::sync::LazyLock;

/// `<:name:id>` and animated `<a:name:id>` custom emoji tags.
static TAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a?:[^:>]+:\d+>").expect("tagged emoji pattern is valid"));

/// Tagged emoji plus bare `:name:` shortcodes.
static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a?:[^:>]+:\d+>|:[A-Za-z0-9_+\-]+:").expect("shortcode emoji pattern is valid")
});

/// Which custom emoji token forms are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiGrammar {
    /// Only Discord's `<a?:name:id>` tags.
    #[default]
    Tagged,
    /// Tags plus `:name:` shortcodes. Also catches colon-delimited text such as the
    /// `:30:` in `10:30:45`.
    Shortcode,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer {
    grammar: EmojiGrammar,
}

impl Sanitizer {
    pub fn new(grammar: EmojiGrammar) -> Self {
        Self { grammar }
    }

    /// Strips custom emoji tokens and trims the result.
    ///
    /// Unicode emoji, mentions and markdown are left as they are. An empty result
    /// means there is nothing to translate.
    pub fn clean(&self, text: &str) -> String {
        let pattern = match self.grammar {
            EmojiGrammar::Tagged => &*TAGGED,
            EmojiGrammar::Shortcode => &*SHORTCODE,
        };

        pattern.replace_all(text, "").trim().to_string()
    }
}
